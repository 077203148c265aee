//! Equipment data repository.
//!
//! Build paths are stored as directed rows in `equipment_build_link`. Create and update
//! rewrite the outgoing links in the same transaction as the equipment row.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    model::equipment::{BuildLinkKind, Equipment, EquipmentFilter, EquipmentParams},
    util::json,
};

use entity::equipment::Column;
use entity::equipment_build_link::Column as LinkColumn;

pub struct EquipmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: &EquipmentParams) -> Result<Equipment, DbErr> {
        let mut model = active_model(params)?;
        model.created_at = ActiveValue::Set(Utc::now());

        let txn = self.db.begin().await?;
        let equipment = model.insert(&txn).await?;
        insert_links(&txn, equipment.id, params).await?;
        txn.commit().await?;

        self.populate(equipment).await
    }

    /// Replaces every field of an equipment item and its build links.
    ///
    /// # Returns
    /// - `Ok(Some(Equipment))` - The updated item
    /// - `Ok(None)` - No item with this id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: &EquipmentParams,
    ) -> Result<Option<Equipment>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Equipment::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model = active_model(params)?;
        model.id = ActiveValue::Unchanged(existing.id);
        model.created_at = ActiveValue::Unchanged(existing.created_at);
        let equipment = model.update(&txn).await?;

        entity::prelude::EquipmentBuildLink::delete_many()
            .filter(LinkColumn::EquipmentId.eq(id))
            .exec(&txn)
            .await?;
        insert_links(&txn, id, params).await?;
        txn.commit().await?;

        self.populate(equipment).await.map(Some)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Equipment>, DbErr> {
        match entity::prelude::Equipment::find_by_id(id).one(self.db).await? {
            Some(equipment) => self.populate(equipment).await.map(Some),
            None => Ok(None),
        }
    }

    /// Lists equipment matching the filter, sorted by name.
    ///
    /// Links for every returned item are loaded with a single query.
    pub async fn list(&self, filter: EquipmentFilter) -> Result<Vec<Equipment>, DbErr> {
        let mut select = entity::prelude::Equipment::find();
        if let Some(category) = filter.category {
            select = select.filter(Column::Category.eq(category.as_ref()));
        }
        if let Some(tier) = filter.tier {
            select = select.filter(Column::Tier.eq(tier.as_ref()));
        }

        let rows = select.order_by_asc(Column::Name).all(self.db).await?;
        let ids: Vec<i32> = rows.iter().map(|e| e.id).collect();
        let mut links = load_links(self.db, &ids).await?;

        rows.into_iter()
            .map(|e| {
                let own = links.remove(&e.id).unwrap_or_default();
                Equipment::from_entity(e, own)
            })
            .collect()
    }

    /// Deletes an item and every build link pointing at it or out of it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::EquipmentBuildLink::delete_many()
            .filter(
                Condition::any()
                    .add(LinkColumn::EquipmentId.eq(id))
                    .add(LinkColumn::LinkedId.eq(id)),
            )
            .exec(&txn)
            .await?;
        let result = entity::prelude::Equipment::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether another item already uses this name.
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut select = entity::prelude::Equipment::find().filter(Column::Name.eq(name));
        if let Some(id) = exclude_id {
            select = select.filter(Column::Id.ne(id));
        }

        Ok(select.count(self.db).await? > 0)
    }

    /// Returns the subset of `ids` that belong to stored equipment.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Equipment::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    async fn populate(&self, equipment: entity::equipment::Model) -> Result<Equipment, DbErr> {
        let links = load_links(self.db, &[equipment.id])
            .await?
            .remove(&equipment.id)
            .unwrap_or_default();

        Equipment::from_entity(equipment, links)
    }
}

/// Loads outgoing links for each id, grouped by owning item and ordered by position.
async fn load_links<C: ConnectionTrait>(
    db: &C,
    ids: &[i32],
) -> Result<HashMap<i32, Vec<entity::equipment_build_link::Model>>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let links = entity::prelude::EquipmentBuildLink::find()
        .filter(LinkColumn::EquipmentId.is_in(ids.iter().copied()))
        .order_by_asc(LinkColumn::EquipmentId)
        .order_by_asc(LinkColumn::Position)
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, Vec<_>> = HashMap::new();
    for link in links {
        grouped.entry(link.equipment_id).or_default().push(link);
    }

    Ok(grouped)
}

fn active_model(params: &EquipmentParams) -> Result<entity::equipment::ActiveModel, DbErr> {
    Ok(entity::equipment::ActiveModel {
        name: ActiveValue::Set(params.name.clone()),
        image: ActiveValue::Set(params.image.clone()),
        description: ActiveValue::Set(params.description.clone()),
        category: ActiveValue::Set(params.category.to_string()),
        tier: ActiveValue::Set(params.tier.to_string()),
        price: ActiveValue::Set(params.price),
        attributes: ActiveValue::Set(json::encode(&params.attributes, "attributes")?),
        passive: ActiveValue::Set(
            params
                .passive
                .as_ref()
                .map(|p| json::encode(p, "passive"))
                .transpose()?,
        ),
        active: ActiveValue::Set(
            params
                .active
                .as_ref()
                .map(|a| json::encode(a, "active"))
                .transpose()?,
        ),
        recommended_for: ActiveValue::Set(json::encode(
            &params.recommended_for,
            "recommended_for",
        )?),
        tags: ActiveValue::Set(json::encode(&params.tags, "tags")?),
        ..Default::default()
    })
}

async fn insert_links<C: ConnectionTrait>(
    db: &C,
    equipment_id: i32,
    params: &EquipmentParams,
) -> Result<(), DbErr> {
    let rows = params
        .build_path
        .iter()
        .enumerate()
        .map(|(i, id)| (BuildLinkKind::BuildPath, i, *id))
        .chain(
            params
                .builds_into
                .iter()
                .enumerate()
                .map(|(i, id)| (BuildLinkKind::BuildsInto, i, *id)),
        );

    for (kind, position, linked_id) in rows {
        entity::equipment_build_link::ActiveModel {
            equipment_id: ActiveValue::Set(equipment_id),
            linked_id: ActiveValue::Set(linked_id),
            kind: ActiveValue::Set(kind.as_ref().to_string()),
            position: ActiveValue::Set(position as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
