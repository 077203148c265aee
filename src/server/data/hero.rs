//! Hero data repository.
//!
//! Heroes own their ally and counter rows in `hero_matchup`. Create and update replace
//! the matchup rows in the same transaction as the hero row, and delete removes every
//! matchup that points at the hero from either side.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    model::{
        hero::{Hero, HeroListQuery, HeroParams, HeroSort, HeroSummary, Matchup, MatchupKind, MatchupRef},
        pagination::{Page, PageParams},
    },
    util::{json, like},
};

use entity::hero::Column;

pub struct HeroRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a hero and its matchups in one transaction.
    ///
    /// # Returns
    /// - `Ok(Hero)` - The created hero with populated matchups
    /// - `Err(DbErr)` - Database error, including unique violations on name or slug
    pub async fn create(&self, params: &HeroParams) -> Result<Hero, DbErr> {
        let now = Utc::now();
        let mut model = active_model(params)?;
        model.created_at = ActiveValue::Set(now);
        model.updated_at = ActiveValue::Set(now);

        let txn = self.db.begin().await?;
        let hero = model.insert(&txn).await?;
        insert_matchups(&txn, hero.id, params).await?;
        txn.commit().await?;

        self.populate(hero).await
    }

    /// Replaces every field of a hero and its matchups.
    ///
    /// The slug is recomputed from the name and `updated_at` is refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(Hero))` - The updated hero
    /// - `Ok(None)` - No hero with this id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: &HeroParams) -> Result<Option<Hero>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Hero::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model = active_model(params)?;
        model.id = ActiveValue::Unchanged(existing.id);
        model.created_at = ActiveValue::Unchanged(existing.created_at);
        model.updated_at = ActiveValue::Set(Utc::now());
        let hero = model.update(&txn).await?;

        entity::prelude::HeroMatchup::delete_many()
            .filter(entity::hero_matchup::Column::HeroId.eq(id))
            .exec(&txn)
            .await?;
        insert_matchups(&txn, id, params).await?;
        txn.commit().await?;

        self.populate(hero).await.map(Some)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hero>, DbErr> {
        match entity::prelude::Hero::find_by_id(id).one(self.db).await? {
            Some(hero) => self.populate(hero).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Hero>, DbErr> {
        let hero = entity::prelude::Hero::find()
            .filter(Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        match hero {
            Some(hero) => self.populate(hero).await.map(Some),
            None => Ok(None),
        }
    }

    /// Gets one page of hero summaries matching the list filters.
    ///
    /// Rows and the total count are fetched concurrently.
    pub async fn get_paginated(
        &self,
        query: &HeroListQuery,
        params: PageParams,
    ) -> Result<Page<HeroSummary>, DbErr> {
        let mut condition = Condition::all();
        if let Some(search) = &query.search {
            condition = condition.add(
                Condition::any()
                    .add(Column::Name.like(like::contains(search)))
                    .add(Column::Title.like(like::contains(search))),
            );
        }
        if let Some(role) = query.role {
            condition = condition.add(Column::Roles.like(json_element_pattern(role.as_ref())));
        }
        if let Some(lane) = query.lane {
            condition = condition.add(Column::Lanes.like(json_element_pattern(lane.as_ref())));
        }
        if let Some(tier) = query.meta_tier {
            condition = condition.add(Column::MetaTier.eq(tier.as_ref()));
        }

        let select = entity::prelude::Hero::find().filter(condition);
        let ordered = match query.sort {
            HeroSort::Name => select.clone().order_by_asc(Column::Name),
            HeroSort::WinRate => select.clone().order_by_desc(Column::WinRate),
            HeroSort::PickRate => select.clone().order_by_desc(Column::PickRate),
            HeroSort::MetaTier => select
                .clone()
                .order_by_asc(Column::MetaTierRank)
                .order_by_desc(Column::WinRate),
        }
        .order_by_asc(Column::Id);

        let (rows, total) = tokio::try_join!(
            ordered
                .offset(params.offset())
                .limit(params.limit)
                .all(self.db),
            select.count(self.db),
        )?;

        let items = rows
            .into_iter()
            .map(HeroSummary::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total,
            params,
        })
    }

    /// Deletes a hero together with every matchup that references it.
    ///
    /// # Returns
    /// - `Ok(true)` - Hero deleted
    /// - `Ok(false)` - No hero with this id
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::HeroMatchup::delete_many()
            .filter(
                Condition::any()
                    .add(entity::hero_matchup::Column::HeroId.eq(id))
                    .add(entity::hero_matchup::Column::OtherHeroId.eq(id)),
            )
            .exec(&txn)
            .await?;
        let result = entity::prelude::Hero::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether another hero already uses this name or slug.
    ///
    /// # Arguments
    /// - `name` - Candidate name
    /// - `slug` - Slug derived from the candidate name
    /// - `exclude_id` - Hero being updated, ignored in the check
    pub async fn name_taken(
        &self,
        name: &str,
        slug: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut select = entity::prelude::Hero::find().filter(
            Condition::any()
                .add(Column::Name.eq(name))
                .add(Column::Slug.eq(slug)),
        );
        if let Some(id) = exclude_id {
            select = select.filter(Column::Id.ne(id));
        }

        Ok(select.count(self.db).await? > 0)
    }

    /// Returns the subset of `ids` that belong to stored heroes.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Hero::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Loads hero rows keyed by id. Unknown ids are absent from the map.
    pub async fn find_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, entity::hero::Model>, DbErr> {
        find_by_ids(self.db, ids).await
    }

    /// Loads allies and counters for a hero row. Matchups whose hero no longer exists
    /// are dropped.
    async fn populate(&self, hero: entity::hero::Model) -> Result<Hero, DbErr> {
        let matchups = entity::prelude::HeroMatchup::find()
            .filter(entity::hero_matchup::Column::HeroId.eq(hero.id))
            .order_by_asc(entity::hero_matchup::Column::Position)
            .all(self.db)
            .await?;

        let other_ids: Vec<i32> = matchups.iter().map(|m| m.other_hero_id).collect();
        let others = find_by_ids(self.db, &other_ids).await?;

        let mut allies = Vec::new();
        let mut counters = Vec::new();
        for matchup in matchups {
            let Some(other) = others.get(&matchup.other_hero_id) else {
                continue;
            };
            let is_ally = matchup.kind == MatchupKind::Ally.as_ref();
            let populated = Matchup::from_entity(matchup, other)?;
            if is_ally {
                allies.push(populated);
            } else {
                counters.push(populated);
            }
        }

        Hero::from_entity(hero, allies, counters)
    }
}

async fn find_by_ids<C: ConnectionTrait>(
    db: &C,
    ids: &[i32],
) -> Result<HashMap<i32, entity::hero::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let heroes = entity::prelude::Hero::find()
        .filter(Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?;

    Ok(heroes.into_iter().map(|h| (h.id, h)).collect())
}

/// Builds the hero columns shared by insert and update. Timestamps and id are left
/// for the caller.
fn active_model(params: &HeroParams) -> Result<entity::hero::ActiveModel, DbErr> {
    let roles: Vec<&str> = params.roles.iter().map(|r| r.as_ref()).collect();
    let lanes: Vec<&str> = params.lanes.iter().map(|l| l.as_ref()).collect();

    Ok(entity::hero::ActiveModel {
        name: ActiveValue::Set(params.name.clone()),
        title: ActiveValue::Set(params.title.clone()),
        image: ActiveValue::Set(params.image.clone()),
        roles: ActiveValue::Set(json::encode(&roles, "roles")?),
        lanes: ActiveValue::Set(json::encode(&lanes, "lanes")?),
        meta_tier: ActiveValue::Set(params.meta_tier.to_string()),
        meta_tier_rank: ActiveValue::Set(params.meta_tier.rank()),
        win_rate: ActiveValue::Set(params.win_rate),
        pick_rate: ActiveValue::Set(params.pick_rate),
        ban_rate: ActiveValue::Set(params.ban_rate),
        skills: ActiveValue::Set(json::encode(&params.skills, "skills")?),
        lore: ActiveValue::Set(params.lore.clone()),
        profile: ActiveValue::Set(params.profile.clone()),
        combo: ActiveValue::Set(json::encode(&params.combo, "combo")?),
        skins: ActiveValue::Set(json::encode(&params.skins, "skins")?),
        slug: ActiveValue::Set(params.slug()),
        ..Default::default()
    })
}

async fn insert_matchups<C: ConnectionTrait>(
    db: &C,
    hero_id: i32,
    params: &HeroParams,
) -> Result<(), DbErr> {
    let rows = tagged(MatchupKind::Ally, &params.allies)
        .chain(tagged(MatchupKind::Counter, &params.counters));

    for (kind, position, matchup) in rows {
        entity::hero_matchup::ActiveModel {
            hero_id: ActiveValue::Set(hero_id),
            other_hero_id: ActiveValue::Set(matchup.hero_id),
            kind: ActiveValue::Set(kind.as_ref().to_string()),
            description: ActiveValue::Set(matchup.description.clone()),
            position: ActiveValue::Set(position as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

fn tagged(
    kind: MatchupKind,
    refs: &[MatchupRef],
) -> impl Iterator<Item = (MatchupKind, usize, &MatchupRef)> {
    refs.iter().enumerate().map(move |(i, m)| (kind, i, m))
}

/// `LIKE` pattern matching one string element of a JSON array column.
fn json_element_pattern(value: &str) -> String {
    format!("%\"{}\"%", value)
}
