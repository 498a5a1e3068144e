use std::path::Path;

use anyhow::Context;
use coupon_auth::Route;
use coupon_core::payloads::{DiningExportFilter, DiningVisit};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DiningCommands;
use crate::context::{AppContext, scope_client};
use crate::output::output;

#[derive(Serialize)]
struct DiningExportResponse {
    path: String,
    bytes: usize,
}

/// Handle `cpn dining <subcommand>`.
pub async fn handle(
    action: &DiningCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let profile = ctx.authorize(&Route::Dining).await?;

    match action {
        DiningCommands::Submit {
            customer_name,
            phone,
            bill,
            at,
            client_id,
        } => {
            let visit = DiningVisit {
                customer_name: customer_name.trim().to_string(),
                phone: phone.trim().to_string(),
                bill_amount: *bill,
                date_time: *at,
                client_id: scope_client(&profile, client_id.as_deref())?,
            };
            visit.validate()?;
            output(&ctx.api.submit_dining(&visit).await?, flags.format)
        }
        DiningCommands::Export {
            from,
            to,
            client_id,
            out,
        } => {
            if let (Some(from), Some(to)) = (from, to)
                && from > to
            {
                anyhow::bail!("--from ({from}) is after --to ({to})");
            }
            let filter = DiningExportFilter {
                client_id: scope_client(&profile, client_id.as_deref())?,
                from: *from,
                to: *to,
            };
            let csv = ctx.api.export_dining_csv(&filter).await?;
            match out {
                Some(path) => {
                    write_csv(path, &csv)?;
                    output(
                        &DiningExportResponse {
                            path: path.display().to_string(),
                            bytes: csv.len(),
                        },
                        flags.format,
                    )
                }
                None => {
                    print!("{csv}");
                    Ok(())
                }
            }
        }
    }
}

fn write_csv(path: &Path, csv: &str) -> anyhow::Result<()> {
    std::fs::write(path, csv).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = csv.len(), "dining export written");
    Ok(())
}
