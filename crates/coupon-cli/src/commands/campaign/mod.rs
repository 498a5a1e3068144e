use coupon_auth::Route;
use coupon_core::UserProfile;
use coupon_core::payloads::{CampaignFilter, CampaignPayload};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CampaignCommands;
use crate::cli::subcommands::campaign::CampaignArgs;
use crate::context::{AppContext, require_client};
use crate::output::output;

/// Handle `cpn campaign <subcommand>`.
pub async fn handle(
    action: &CampaignCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CampaignCommands::List { status } => {
            ctx.authorize(&Route::Campaigns).await?;
            let campaigns = ctx
                .api
                .list_campaigns(&CampaignFilter { status: *status })
                .await?;
            output(&campaigns, flags.format)
        }
        CampaignCommands::Get { id } => {
            ctx.authorize(&Route::Campaigns).await?;
            output(&ctx.api.get_campaign(id).await?, flags.format)
        }
        CampaignCommands::Create(args) => {
            let profile = ctx.authorize(&Route::CampaignNew).await?;
            let payload = payload_from(args, &profile)?;
            output(&ctx.api.create_campaign(&payload).await?, flags.format)
        }
        CampaignCommands::Update { id, campaign } => {
            let profile = ctx.authorize(&Route::CampaignEdit(id.clone())).await?;
            let payload = payload_from(campaign, &profile)?;
            output(&ctx.api.update_campaign(id, &payload).await?, flags.format)
        }
    }
}

/// Build the request body, filling unset values from the form defaults.
fn payload_from(args: &CampaignArgs, profile: &UserProfile) -> anyhow::Result<CampaignPayload> {
    let defaults = CampaignPayload::default();
    let payload = CampaignPayload {
        campaign_name: args.name.trim().to_string(),
        client_id: Some(require_client(profile, args.client_id.as_deref())?),
        collection_start_date: args.collection_start,
        collection_end_date: args.collection_end,
        redemption_start_date: args.redemption_start,
        redemption_end_date: args.redemption_end,
        slab_step_amount: args.slab_step.unwrap_or(defaults.slab_step_amount),
        min_bill_amount: args.min_bill.unwrap_or(defaults.min_bill_amount),
        allow_multiple_coupons: args.allow_multiple,
        max_coupons_per_invoice: args
            .max_per_invoice
            .unwrap_or(defaults.max_coupons_per_invoice),
        allow_partial_redemption: args.allow_partial,
        require_bill_greater_than_coupon: !args.allow_bill_below_coupon,
        order_type_allowed: if args.order_types.is_empty() {
            defaults.order_type_allowed
        } else {
            args.order_types.clone()
        },
        status: args.status.unwrap_or(defaults.status),
    };
    payload.validate()?;
    Ok(payload)
}
