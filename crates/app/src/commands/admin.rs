//! Admin console operations

use awsomeshop_domain::{
    OrderStatus, PointsBalanceStats, PointsGrantStats, Product, ProductStatus, RedemptionOrder,
    RedemptionStats, Result, ShopError, User,
};
use awsomeshop_infra::api::endpoints::admin::{
    CreateEmployeeRequest, CreateProductRequest, PointsAdjustment, UpdateProductRequest,
};
use tracing::info;

use super::notify_failure;
use crate::context::AppContext;

// ---------------------------------------------------------------------------
// User management
// ---------------------------------------------------------------------------

pub async fn create_employee(ctx: &AppContext, request: CreateEmployeeRequest) -> Result<User> {
    match ctx.admin.users.create(&request).await {
        Ok(user) => {
            ctx.notifications.success(format!("Employee created: {}", user.full_name));
            Ok(user)
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

pub async fn list_employees(ctx: &AppContext, is_active: Option<bool>) -> Result<Vec<User>> {
    match ctx.admin.users.list(is_active).await {
        Ok(users) => Ok(users),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

pub async fn set_employee_status(ctx: &AppContext, user_id: i64, is_active: bool) -> Result<()> {
    match ctx.admin.users.set_status(user_id, is_active).await {
        Ok(()) => {
            ctx.notifications
                .success(if is_active { "Account enabled" } else { "Account disabled" });
            Ok(())
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Product management
// ---------------------------------------------------------------------------

pub async fn create_product(ctx: &AppContext, request: CreateProductRequest) -> Result<Product> {
    match ctx.admin.products.create(&request).await {
        Ok(product) => {
            ctx.notifications.success(format!("Product created: {}", product.name));
            Ok(product)
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

pub async fn update_product(
    ctx: &AppContext,
    product_id: i64,
    request: UpdateProductRequest,
) -> Result<Product> {
    match ctx.admin.products.update(product_id, &request).await {
        Ok(product) => {
            ctx.notifications.success(format!("Product updated: {}", product.name));
            Ok(product)
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

pub async fn set_product_status(
    ctx: &AppContext,
    product_id: i64,
    status: ProductStatus,
) -> Result<()> {
    match ctx.admin.products.set_status(product_id, status).await {
        Ok(()) => {
            ctx.notifications.success("Product status updated");
            Ok(())
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// Bulk import from one markdown table, passed through verbatim.
pub async fn import_products(ctx: &AppContext, markdown: &str) -> Result<Vec<Product>> {
    if markdown.trim().is_empty() {
        let err = ShopError::InvalidInput("import table is empty".into());
        notify_failure(ctx, &err);
        return Err(err);
    }

    match ctx.admin.products.batch_import(markdown).await {
        Ok(products) => {
            info!(count = products.len(), "products imported");
            ctx.notifications.success(format!("Imported {} products", products.len()));
            Ok(products)
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

pub async fn list_all_products(
    ctx: &AppContext,
    status: Option<ProductStatus>,
) -> Result<Vec<Product>> {
    match ctx.admin.products.list(status).await {
        Ok(products) => Ok(products),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Points management
// ---------------------------------------------------------------------------

pub async fn grant_points(ctx: &AppContext, adjustment: PointsAdjustment) -> Result<()> {
    match ctx.admin.points.grant(&adjustment).await {
        Ok(()) => {
            ctx.notifications.success("Points granted");
            Ok(())
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

pub async fn deduct_points(ctx: &AppContext, adjustment: PointsAdjustment) -> Result<()> {
    match ctx.admin.points.deduct(&adjustment).await {
        Ok(()) => {
            ctx.notifications.success("Points deducted");
            Ok(())
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// Bulk grants from one markdown table, passed through verbatim.
pub async fn batch_grant_points(ctx: &AppContext, markdown: &str) -> Result<()> {
    if markdown.trim().is_empty() {
        let err = ShopError::InvalidInput("grant table is empty".into());
        notify_failure(ctx, &err);
        return Err(err);
    }

    match ctx.admin.points.batch_grant(markdown).await {
        Ok(()) => {
            ctx.notifications.success("Batch grant applied");
            Ok(())
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Order management
// ---------------------------------------------------------------------------

pub async fn list_orders(
    ctx: &AppContext,
    status: Option<OrderStatus>,
    user_id: Option<i64>,
) -> Result<Vec<RedemptionOrder>> {
    match ctx.admin.orders.list(status, user_id).await {
        Ok(orders) => Ok(orders),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// Mark a batch of orders delivered, then re-fetch the list.
///
/// The selected order numbers are joined into the single backend-parsed
/// string the batch endpoint takes. The refetched list is the page's new
/// truth; no status is flipped locally.
pub async fn deliver_orders(
    ctx: &AppContext,
    order_numbers: &[String],
) -> Result<Vec<RedemptionOrder>> {
    if order_numbers.is_empty() {
        let err = ShopError::InvalidInput("no orders selected".into());
        notify_failure(ctx, &err);
        return Err(err);
    }

    let joined = order_numbers.join("\n");
    match ctx.admin.orders.batch_update_status(&joined, OrderStatus::Delivered).await {
        Ok(()) => {
            info!(count = order_numbers.len(), "orders marked delivered");
            ctx.notifications.success(format!("{} orders delivered", order_numbers.len()));
        }
        Err(err) => {
            notify_failure(ctx, &err);
            return Err(err);
        }
    }

    match ctx.admin.orders.list(None, None).await {
        Ok(orders) => Ok(orders),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

pub async fn points_grants_report(ctx: &AppContext) -> Result<Vec<PointsGrantStats>> {
    match ctx.admin.reports.points_grants().await {
        Ok(rows) => Ok(rows),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

pub async fn points_balances_report(ctx: &AppContext) -> Result<Vec<PointsBalanceStats>> {
    match ctx.admin.reports.points_balances().await {
        Ok(rows) => Ok(rows),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

pub async fn redemptions_report(ctx: &AppContext) -> Result<Vec<RedemptionStats>> {
    match ctx.admin.reports.redemptions().await {
        Ok(rows) => Ok(rows),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}
