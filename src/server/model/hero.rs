//! Hero domain models and parameters.
//!
//! Roles, lanes, skills, combos and skins are stored as JSON columns on the hero row.
//! Allies and counters live in the `hero_matchup` table and are populated with the
//! referenced hero's summary when a single hero is read.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{
    model::hero::{
        ComboDto, HeroDto, HeroInputDto, HeroSummaryDto, MatchupDto, MatchupInputDto, SkillDto,
        SkinDto,
    },
    server::{
        error::AppError,
        util::{json, slug::hero_slug, validate::Validator},
    },
};

const MAX_SKILLS: usize = 5;
const MAX_SEARCH_LENGTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum HeroRole {
    Tank,
    Fighter,
    Assassin,
    Mage,
    Marksman,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum Lane {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum MetaTier {
    #[strum(serialize = "S+")]
    SPlus,
    S,
    A,
    B,
    C,
}

impl MetaTier {
    /// Sort key stored next to the tier label, 0 is the strongest tier.
    pub fn rank(self) -> i16 {
        match self {
            Self::SPlus => 0,
            Self::S => 1,
            Self::A => 2,
            Self::B => 3,
            Self::C => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
pub enum HeroSort {
    #[default]
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "winRate")]
    WinRate,
    #[strum(serialize = "pickRate")]
    PickRate,
    /// Tier rank ascending, then win rate descending.
    #[strum(serialize = "metaTier")]
    MetaTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum MatchupKind {
    #[strum(serialize = "ally")]
    Ally,
    #[strum(serialize = "counter")]
    Counter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    /// Indices into the hero's skill list.
    pub skills: Vec<usize>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub name: String,
    pub image: String,
}

/// Ally or counter reference as written by a client.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupRef {
    pub hero_id: i32,
    pub description: String,
}

impl From<MatchupInputDto> for MatchupRef {
    fn from(dto: MatchupInputDto) -> Self {
        Self {
            hero_id: dto.hero,
            description: dto.description.trim().to_string(),
        }
    }
}

/// Ally or counter populated with the referenced hero.
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub hero_id: i32,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub roles: Vec<String>,
    pub description: String,
}

impl Matchup {
    /// Joins a matchup row with the hero it points at.
    ///
    /// # Returns
    /// - `Ok(Matchup)` - Populated matchup
    /// - `Err(DbErr::Custom)` - The referenced hero's roles column is malformed
    pub fn from_entity(
        matchup: entity::hero_matchup::Model,
        other: &entity::hero::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            hero_id: other.id,
            name: other.name.clone(),
            slug: other.slug.clone(),
            image: other.image.clone(),
            roles: json::decode(other.roles.clone(), "roles")?,
            description: matchup.description,
        })
    }

    pub fn into_dto(self) -> MatchupDto {
        MatchupDto {
            hero: self.hero_id,
            name: self.name,
            slug: self.slug,
            image: self.image,
            roles: self.roles,
            description: self.description,
        }
    }
}

/// Full hero with populated allies and counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub image: String,
    pub roles: Vec<String>,
    pub lanes: Vec<String>,
    pub meta_tier: String,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub ban_rate: f64,
    pub skills: Vec<Skill>,
    pub allies: Vec<Matchup>,
    pub counters: Vec<Matchup>,
    pub lore: String,
    pub profile: String,
    pub combo: Vec<Combo>,
    pub skins: Vec<Skin>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hero {
    /// Converts the hero row and its populated matchups into a domain model.
    ///
    /// # Returns
    /// - `Ok(Hero)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A JSON column does not match its expected shape
    pub fn from_entity(
        entity: entity::hero::Model,
        allies: Vec<Matchup>,
        counters: Vec<Matchup>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            title: entity.title,
            image: entity.image,
            roles: json::decode(entity.roles, "roles")?,
            lanes: json::decode(entity.lanes, "lanes")?,
            meta_tier: entity.meta_tier,
            win_rate: entity.win_rate,
            pick_rate: entity.pick_rate,
            ban_rate: entity.ban_rate,
            skills: json::decode(entity.skills, "skills")?,
            allies,
            counters,
            lore: entity.lore,
            profile: entity.profile,
            combo: json::decode(entity.combo, "combo")?,
            skins: json::decode(entity.skins, "skins")?,
            slug: entity.slug,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> HeroDto {
        HeroDto {
            id: self.id,
            name: self.name,
            title: self.title,
            image: self.image,
            roles: self.roles,
            lanes: self.lanes,
            meta_tier: self.meta_tier,
            win_rate: self.win_rate,
            pick_rate: self.pick_rate,
            ban_rate: round_rate(self.ban_rate),
            skills: self
                .skills
                .into_iter()
                .map(|s| SkillDto {
                    name: s.name,
                    icon: s.icon,
                    description: s.description,
                })
                .collect(),
            allies: self.allies.into_iter().map(Matchup::into_dto).collect(),
            counters: self.counters.into_iter().map(Matchup::into_dto).collect(),
            lore: self.lore,
            profile: self.profile,
            combo: self
                .combo
                .into_iter()
                .map(|c| ComboDto {
                    skills: c.skills.into_iter().map(|i| i as i64).collect(),
                    description: c.description,
                })
                .collect(),
            skins: self
                .skins
                .into_iter()
                .map(|s| SkinDto {
                    name: s.name,
                    image: s.image,
                })
                .collect(),
            slug: self.slug,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Hero fields shown in list responses and meta snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroSummary {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub image: String,
    pub roles: Vec<String>,
    pub lanes: Vec<String>,
    pub meta_tier: String,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub ban_rate: f64,
    pub slug: String,
}

impl HeroSummary {
    pub fn from_entity(entity: entity::hero::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            title: entity.title,
            image: entity.image,
            roles: json::decode(entity.roles, "roles")?,
            lanes: json::decode(entity.lanes, "lanes")?,
            meta_tier: entity.meta_tier,
            win_rate: entity.win_rate,
            pick_rate: entity.pick_rate,
            ban_rate: entity.ban_rate,
            slug: entity.slug,
        })
    }

    pub fn into_dto(self) -> HeroSummaryDto {
        HeroSummaryDto {
            id: self.id,
            name: self.name,
            title: self.title,
            image: self.image,
            roles: self.roles,
            lanes: self.lanes,
            meta_tier: self.meta_tier,
            win_rate: self.win_rate,
            pick_rate: self.pick_rate,
            ban_rate: round_rate(self.ban_rate),
            slug: self.slug,
        }
    }
}

/// Validated hero fields for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroParams {
    pub name: String,
    pub title: String,
    pub image: String,
    pub roles: Vec<HeroRole>,
    pub lanes: Vec<Lane>,
    pub meta_tier: MetaTier,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub ban_rate: f64,
    pub skills: Vec<Skill>,
    pub allies: Vec<MatchupRef>,
    pub counters: Vec<MatchupRef>,
    pub lore: String,
    pub profile: String,
    pub combo: Vec<Combo>,
    pub skins: Vec<Skin>,
}

impl HeroParams {
    /// Validates a hero request body.
    ///
    /// Skills without a non-empty description are dropped before counting, so combo
    /// indices refer to the remaining skills. Matchup references are only checked for
    /// shape here; the service verifies that they point at existing heroes.
    ///
    /// # Returns
    /// - `Ok(HeroParams)` - Trimmed, validated parameters
    /// - `Err(AppError::Validation)` - Every failed rule
    pub fn from_dto(dto: HeroInputDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        v.length(&dto.name, 1, 100, "Hero name must be between 1 and 100 characters");
        v.check(
            dto.name.trim().is_empty() || !hero_slug(&dto.name).is_empty(),
            "Hero name must contain at least one letter or digit",
        );
        v.length(&dto.title, 1, 200, "Hero title must be between 1 and 200 characters");
        v.check(!dto.image.trim().is_empty(), "Hero image is required");

        v.check(!dto.roles.is_empty(), "Hero must have at least one role");
        let roles = v.parse_all::<HeroRole>(&dto.roles, "Invalid role");
        v.check(!dto.lanes.is_empty(), "Hero must have at least one lane");
        let lanes = v.parse_all::<Lane>(&dto.lanes, "Invalid lane");
        let meta_tier = v.parse::<MetaTier>(&dto.meta_tier, "Invalid meta tier");

        v.range(dto.win_rate, 0.0, 100.0, "Win rate must be between 0 and 100");
        v.range(dto.pick_rate, 0.0, 100.0, "Pick rate must be between 0 and 100");
        v.range(dto.ban_rate, 0.0, 100.0, "Ban rate must be between 0 and 100");

        let skills: Vec<Skill> = dto
            .skills
            .into_iter()
            .filter(|s| !s.description.trim().is_empty())
            .map(|s| Skill {
                name: s.name.trim().to_string(),
                icon: s.icon.trim().to_string(),
                description: s.description.trim().to_string(),
            })
            .collect();

        if skills.is_empty() {
            v.push("Hero must have at least one skill with description");
        } else if skills.len() > MAX_SKILLS {
            v.push("Hero cannot have more than 5 skills");
        }
        for skill in &skills {
            if skill.name.is_empty() {
                v.push("Skill name is required");
            } else {
                v.length(&skill.name, 1, 100, "Skill name must be between 1 and 100 characters");
            }
            v.length(
                &skill.description,
                1,
                1000,
                "Skill description must be between 1 and 1000 characters",
            );
        }

        let mut combo = Vec::with_capacity(dto.combo.len());
        for entry in dto.combo {
            let in_range = entry
                .skills
                .iter()
                .all(|&i| i >= 0 && (i as usize) < skills.len());
            if !in_range {
                v.push("Combo references a skill that does not exist");
                continue;
            }
            combo.push(Combo {
                skills: entry.skills.into_iter().map(|i| i as usize).collect(),
                description: entry.description.trim().to_string(),
            });
        }

        let skins: Vec<Skin> = dto
            .skins
            .into_iter()
            .map(|s| Skin {
                name: s.name.trim().to_string(),
                image: s.image.trim().to_string(),
            })
            .collect();
        v.check(
            skins.iter().all(|s| !s.name.is_empty() && !s.image.is_empty()),
            "Skin name and image are required",
        );

        let matchups_positive = dto
            .allies
            .iter()
            .chain(dto.counters.iter())
            .all(|m| m.hero > 0);
        v.check(matchups_positive, "Ally and counter references must be valid hero ids");

        v.finish()?;

        let (Some(meta_tier), Some(win_rate), Some(pick_rate), Some(ban_rate)) =
            (meta_tier, dto.win_rate, dto.pick_rate, dto.ban_rate)
        else {
            return Err(AppError::InternalError(
                "Hero validation passed with missing fields".to_string(),
            ));
        };

        Ok(Self {
            name: dto.name.trim().to_string(),
            title: dto.title.trim().to_string(),
            image: dto.image.trim().to_string(),
            roles,
            lanes,
            meta_tier,
            win_rate,
            pick_rate,
            ban_rate,
            skills,
            allies: dto.allies.into_iter().map(MatchupRef::from).collect(),
            counters: dto.counters.into_iter().map(MatchupRef::from).collect(),
            lore: dto.lore,
            profile: dto.profile,
            combo,
            skins,
        })
    }

    pub fn slug(&self) -> String {
        hero_slug(&self.name)
    }

    /// Distinct hero ids referenced by allies and counters.
    pub fn referenced_hero_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self
            .allies
            .iter()
            .chain(self.counters.iter())
            .map(|m| m.hero_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// Filters and ordering for the hero list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeroListQuery {
    /// Case-insensitive substring matched against name or title.
    pub search: Option<String>,
    pub role: Option<HeroRole>,
    pub lane: Option<Lane>,
    pub meta_tier: Option<MetaTier>,
    pub sort: HeroSort,
}

impl HeroListQuery {
    /// Validates raw query values. `None` values (including `"all"`) are not filtered on.
    pub fn parse(
        search: Option<&str>,
        role: Option<&str>,
        lane: Option<&str>,
        meta_tier: Option<&str>,
        sort: Option<&str>,
    ) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let search = search.map(str::trim).filter(|s| !s.is_empty());
        if let Some(search) = search {
            v.length(
                search,
                0,
                MAX_SEARCH_LENGTH,
                "Search query must be less than 100 characters",
            );
        }
        let role = role.and_then(|r| v.parse::<HeroRole>(r, "Invalid role"));
        let lane = lane.and_then(|l| v.parse::<Lane>(l, "Invalid lane"));
        let meta_tier = meta_tier.and_then(|t| v.parse::<MetaTier>(t, "Invalid meta tier"));
        let sort = sort
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| v.parse::<HeroSort>(s, "Invalid sort option"))
            .unwrap_or_default();

        v.finish()?;

        Ok(Self {
            search: search.map(str::to_string),
            role,
            lane,
            meta_tier,
            sort,
        })
    }
}

/// Rounds a percentage to 2 decimal places.
fn round_rate(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> HeroInputDto {
        HeroInputDto {
            name: "Lu Bu".to_string(),
            title: "God of War".to_string(),
            image: "https://cdn.example.com/lubu.png".to_string(),
            roles: vec!["Fighter".to_string()],
            lanes: vec!["Top".to_string()],
            meta_tier: "S+".to_string(),
            win_rate: Some(51.2),
            pick_rate: Some(12.0),
            ban_rate: Some(3.456),
            skills: vec![SkillDto {
                name: "Halberd".to_string(),
                icon: String::new(),
                description: "Sweeps forward.".to_string(),
            }],
            ..Default::default()
        }
    }

    fn details(result: Result<HeroParams, AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation(details)) => details,
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    /// Tests that a complete payload converts into params.
    ///
    /// Expected: Ok with parsed enums and slug derived from the name
    #[test]
    fn accepts_valid_hero() {
        let params = HeroParams::from_dto(valid_dto()).unwrap();

        assert_eq!(params.meta_tier, MetaTier::SPlus);
        assert_eq!(params.roles, vec![HeroRole::Fighter]);
        assert_eq!(params.slug(), "lu-bu");
    }

    /// Tests that every failing rule is reported in one error.
    ///
    /// Expected: Err(Validation) listing name, role, lane, tier and rate problems
    #[test]
    fn collects_all_validation_errors() {
        let dto = HeroInputDto {
            name: String::new(),
            roles: vec![],
            lanes: vec!["Middle".to_string()],
            meta_tier: "SS".to_string(),
            win_rate: Some(101.0),
            pick_rate: None,
            ..valid_dto()
        };

        let details = details(HeroParams::from_dto(dto));

        assert!(details.contains(&"Hero name must be between 1 and 100 characters".to_string()));
        assert!(details.contains(&"Hero must have at least one role".to_string()));
        assert!(details.contains(&"Invalid lane".to_string()));
        assert!(details.contains(&"Invalid meta tier".to_string()));
        assert!(details.contains(&"Win rate must be between 0 and 100".to_string()));
        assert!(details.contains(&"Pick rate must be between 0 and 100".to_string()));
    }

    /// Tests that skills without a description are dropped before counting.
    ///
    /// Expected: Err when no described skill remains, Ok with the described skill otherwise
    #[test]
    fn drops_skills_without_description() {
        let blank = SkillDto {
            name: "Passive".to_string(),
            icon: String::new(),
            description: "   ".to_string(),
        };

        let only_blank = HeroInputDto {
            skills: vec![blank.clone()],
            ..valid_dto()
        };
        assert_eq!(
            details(HeroParams::from_dto(only_blank)),
            vec!["Hero must have at least one skill with description"]
        );

        let mut dto = valid_dto();
        dto.skills.insert(0, blank);
        let params = HeroParams::from_dto(dto).unwrap();
        assert_eq!(params.skills.len(), 1);
        assert_eq!(params.skills[0].name, "Halberd");
    }

    /// Tests the upper bound on skills.
    ///
    /// Expected: Err(Validation) for six described skills
    #[test]
    fn rejects_more_than_five_skills() {
        let skill = valid_dto().skills[0].clone();
        let dto = HeroInputDto {
            skills: vec![skill; 6],
            ..valid_dto()
        };

        assert_eq!(
            details(HeroParams::from_dto(dto)),
            vec!["Hero cannot have more than 5 skills"]
        );
    }

    /// Tests that a described skill still needs a name.
    ///
    /// Expected: Err(Validation) with "Skill name is required"
    #[test]
    fn requires_skill_name() {
        let dto = HeroInputDto {
            skills: vec![SkillDto {
                name: " ".to_string(),
                icon: String::new(),
                description: "Does things.".to_string(),
            }],
            ..valid_dto()
        };

        assert_eq!(details(HeroParams::from_dto(dto)), vec!["Skill name is required"]);
    }

    /// Tests that combo indices must point at existing skills.
    ///
    /// Expected: Err(Validation) for index 1 when only one skill exists
    #[test]
    fn rejects_out_of_range_combo() {
        let dto = HeroInputDto {
            combo: vec![ComboDto {
                skills: vec![0, 1],
                description: "1 then 2".to_string(),
            }],
            ..valid_dto()
        };

        assert_eq!(
            details(HeroParams::from_dto(dto)),
            vec!["Combo references a skill that does not exist"]
        );
    }

    /// Tests that ban rate is reported with two decimals.
    ///
    /// Expected: 3.456 is reported as 3.46
    #[test]
    fn rounds_ban_rate_in_summary() {
        let summary = HeroSummary {
            id: 1,
            name: "Lu Bu".to_string(),
            title: String::new(),
            image: String::new(),
            roles: vec![],
            lanes: vec![],
            meta_tier: "S".to_string(),
            win_rate: 50.0,
            pick_rate: 10.0,
            ban_rate: 3.456,
            slug: "lu-bu".to_string(),
        };

        assert_eq!(summary.into_dto().ban_rate, 3.46);
    }

    /// Tests list query parsing of sort and filters.
    ///
    /// Expected: Known values parse, unknown sort is rejected
    #[test]
    fn parses_list_query() {
        let query =
            HeroListQuery::parse(Some(" lu "), Some("Tank"), None, Some("S+"), Some("metaTier"))
                .unwrap();
        assert_eq!(query.search.as_deref(), Some("lu"));
        assert_eq!(query.role, Some(HeroRole::Tank));
        assert_eq!(query.meta_tier, Some(MetaTier::SPlus));
        assert_eq!(query.sort, HeroSort::MetaTier);

        assert!(HeroListQuery::parse(None, None, None, None, Some("latest")).is_err());
        assert!(HeroListQuery::parse(Some(&"x".repeat(101)), None, None, None, None).is_err());
    }
}
