use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Plain SQL accepted by both Postgres and SQLite.
const STOCK_STATUS_VIEW: &str = r#"
CREATE VIEW stock_status AS
SELECT p.id AS product_id,
       p.sku AS sku,
       p.name AS name,
       i.quantity AS quantity,
       i.reorder_level AS reorder_level,
       CASE
           WHEN i.quantity = 0 THEN 'out_of_stock'
           WHEN i.quantity <= i.reorder_level THEN 'low_stock'
           ELSE 'in_stock'
       END AS stock_state
FROM products p
JOIN inventory i ON i.product_id = p.id
"#;

const ORDER_SUMMARY_VIEW: &str = r#"
CREATE VIEW order_summary AS
SELECT o.id AS order_id,
       u.id AS user_id,
       u.first_name || ' ' || u.last_name AS customer_name,
       u.email AS email,
       o.total AS total,
       o.status AS status,
       o.created_at AS created_at
FROM orders o
JOIN users u ON u.id = o.user_id
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared(STOCK_STATUS_VIEW).await?;
        conn.execute_unprepared(ORDER_SUMMARY_VIEW).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared("DROP VIEW IF EXISTS order_summary")
            .await?;
        conn.execute_unprepared("DROP VIEW IF EXISTS stock_status")
            .await?;
        Ok(())
    }
}
