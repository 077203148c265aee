//! Arcana data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::arcana::{Arcana, ArcanaListQuery, ArcanaParams, ArcanaPatch, ArcanaSort},
    util::json,
};

use entity::arcana::Column;

pub struct ArcanaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArcanaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ArcanaParams) -> Result<Arcana, DbErr> {
        let entity = entity::arcana::ActiveModel {
            name: ActiveValue::Set(params.name),
            color: ActiveValue::Set(params.color.to_string()),
            tier: ActiveValue::Set(params.tier),
            image: ActiveValue::Set(params.image),
            description: ActiveValue::Set(params.description),
            attributes: ActiveValue::Set(json::encode(&params.attributes, "attributes")?),
            effects: ActiveValue::Set(json::encode(&params.effects, "effects")?),
            usage: ActiveValue::Set(params.usage),
            recommended_for: ActiveValue::Set(json::encode(
                &params.recommended_for,
                "recommended_for",
            )?),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Arcana::from_entity(entity)
    }

    /// Writes only the fields present in the patch.
    ///
    /// # Returns
    /// - `Ok(Some(Arcana))` - The updated arcana
    /// - `Ok(None)` - No arcana with this id
    /// - `Err(DbErr)` - Database error
    pub async fn patch(&self, id: i32, patch: ArcanaPatch) -> Result<Option<Arcana>, DbErr> {
        let Some(existing) = entity::prelude::Arcana::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut model: entity::arcana::ActiveModel = existing.clone().into();
        if let Some(name) = patch.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(color) = patch.color {
            model.color = ActiveValue::Set(color.to_string());
        }
        if let Some(tier) = patch.tier {
            model.tier = ActiveValue::Set(tier);
        }
        if let Some(image) = patch.image {
            model.image = ActiveValue::Set(image);
        }
        if let Some(description) = patch.description {
            model.description = ActiveValue::Set(description);
        }
        if let Some(attributes) = patch.attributes {
            model.attributes = ActiveValue::Set(json::encode(&attributes, "attributes")?);
        }
        if let Some(effects) = patch.effects {
            model.effects = ActiveValue::Set(json::encode(&effects, "effects")?);
        }
        if let Some(usage) = patch.usage {
            model.usage = ActiveValue::Set(Some(usage).filter(|u| !u.is_empty()));
        }
        if let Some(recommended_for) = patch.recommended_for {
            model.recommended_for =
                ActiveValue::Set(json::encode(&recommended_for, "recommended_for")?);
        }

        let entity = if model.is_changed() {
            model.update(self.db).await?
        } else {
            existing
        };

        Arcana::from_entity(entity).map(Some)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Arcana>, DbErr> {
        entity::prelude::Arcana::find_by_id(id)
            .one(self.db)
            .await?
            .map(Arcana::from_entity)
            .transpose()
    }

    /// Lists arcana matching the filters in the requested order.
    pub async fn list(&self, query: &ArcanaListQuery) -> Result<Vec<Arcana>, DbErr> {
        let mut select = entity::prelude::Arcana::find();
        if let Some(color) = query.color {
            select = select.filter(Column::Color.eq(color.as_ref()));
        }
        if let Some(tier) = query.tier {
            select = select.filter(Column::Tier.eq(tier));
        }

        let select = match query.sort {
            ArcanaSort::Name => select.order_by_asc(Column::Name),
            ArcanaSort::Tier => select.order_by_asc(Column::Tier).order_by_asc(Column::Name),
            ArcanaSort::Default => select
                .order_by_asc(Column::Color)
                .order_by_asc(Column::Tier)
                .order_by_asc(Column::Name),
        };

        select
            .all(self.db)
            .await?
            .into_iter()
            .map(Arcana::from_entity)
            .collect()
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Arcana::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether another arcana already uses this name.
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut select = entity::prelude::Arcana::find().filter(Column::Name.eq(name));
        if let Some(id) = exclude_id {
            select = select.filter(Column::Id.ne(id));
        }

        Ok(select.count(self.db).await? > 0)
    }
}
