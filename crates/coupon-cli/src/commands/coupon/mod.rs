use coupon_auth::Route;
use coupon_core::Role;
use coupon_core::payloads::{CouponFilter, RedeemRequest};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CouponCommands;
use crate::context::{AppContext, scope_client};
use crate::output::output;

/// Handle `cpn coupon <subcommand>`.
pub async fn handle(
    action: &CouponCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CouponCommands::List {
            client_id,
            status,
            customer_name,
            customer_mobile,
        } => {
            let profile = ctx.authorize(&Route::Coupons).await?;
            let filter = CouponFilter {
                client_id: scope_client(&profile, client_id.as_deref())?,
                status: *status,
                customer_name: customer_name.clone(),
                customer_mobile: customer_mobile.clone(),
            };
            output(&ctx.api.list_coupons(&filter).await?, flags.format)
        }
        CouponCommands::Lookup { mobile, client_id } => {
            let profile = ctx.authorize(&Route::Redeem).await?;
            let client = scope_client(&profile, client_id.as_deref())?;
            let coupons = ctx.api.customer_coupons(mobile, client.as_deref()).await?;
            output(&coupons, flags.format)
        }
        CouponCommands::Redeem {
            coupon_id,
            invoice,
            bill,
            client_id,
        } => {
            let profile = ctx.authorize(&Route::Redeem).await?;
            let scoped = scope_client(&profile, client_id.as_deref())?;
            let request = RedeemRequest {
                coupon_id: coupon_id.clone(),
                invoice_no: invoice.trim().to_string(),
                bill_amount: *bill,
                // Tenant users are resolved from their token on the backend.
                client_id: scoped.filter(|_| profile.role == Role::Admin),
            };
            request.validate()?;
            output(&ctx.api.redeem_coupon(&request).await?, flags.format)
        }
    }
}
