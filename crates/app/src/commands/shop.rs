//! Catalog browsing and redemption

use awsomeshop_domain::{Product, RedemptionOrder, Result, UserPatch};
use tracing::info;

use super::notify_failure;
use crate::context::AppContext;

/// Active catalog for the product list page.
pub async fn list_products(ctx: &AppContext) -> Result<Vec<Product>> {
    match ctx.products.list().await {
        Ok(products) => Ok(products),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// Single product detail.
pub async fn get_product(ctx: &AppContext, product_id: i64) -> Result<Product> {
    match ctx.products.get(product_id).await {
        Ok(product) => Ok(product),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// Redeem a product.
///
/// On success the balance returned by the backend is patched into the
/// in-memory user snapshot; no `/auth/me` round trip happens. The catalog
/// itself is re-fetched by the page, never decremented locally.
pub async fn redeem(ctx: &AppContext, product_id: i64) -> Result<RedemptionOrder> {
    match ctx.redemptions.redeem(product_id).await {
        Ok(order) => {
            ctx.session.update_user(&UserPatch::points_balance(order.points_balance_after));
            info!(order_number = %order.order_number, "product redeemed");
            ctx.notifications.success(format!("Redeemed: {}", order.product_name));
            Ok(order)
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// The caller's redemption history.
pub async fn redemption_history(ctx: &AppContext) -> Result<Vec<RedemptionOrder>> {
    match ctx.redemptions.history().await {
        Ok(orders) => Ok(orders),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// One order, by id.
pub async fn redemption_detail(ctx: &AppContext, order_id: i64) -> Result<RedemptionOrder> {
    match ctx.redemptions.get(order_id).await {
        Ok(order) => Ok(order),
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}
