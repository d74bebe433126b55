use std::io::Write;

use tracing::warn;

use crate::clients::FunctionRegistry;
use crate::core::models::FunctionSummary;
use crate::errors::ReportError;

/// Lists the functions in `region`, degrading a failed call to an empty list.
///
/// The failure is reported on `out` so the operator sees which region is
/// missing from the table.
///
/// # Errors
///
/// Returns an error only if writing the diagnostic to `out` fails.
pub async fn list_region_functions<R, W>(
    registry: &R,
    region: &str,
    out: &mut W,
) -> Result<Vec<FunctionSummary>, ReportError>
where
    R: FunctionRegistry + ?Sized,
    W: Write,
{
    match registry.list_functions(region).await {
        Ok(functions) => Ok(functions),
        Err(e) => {
            warn!(region, error = %e, "Listing functions failed");
            writeln!(out, "Error fetching Lambda functions in {region}: {}", e.detail())?;
            Ok(Vec::new())
        }
    }
}
