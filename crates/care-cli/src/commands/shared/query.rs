use care_config::GeneralConfig;
use care_core::enums::SortOrder;
use care_core::pagination::ListQuery;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;

/// Build a [`ListQuery`] from list flags, global flags and config defaults.
pub fn list_query(
    args: &ListArgs,
    flags: &GlobalFlags,
    general: &GeneralConfig,
) -> anyhow::Result<ListQuery> {
    let mut query = ListQuery::with_limit(effective_limit(flags.limit, general.default_limit))
        .page(args.page);
    if let Some(search) = &args.search {
        query = query.search(search);
    }

    let order = args
        .sort_order
        .as_deref()
        .map(|raw| parse_enum::<SortOrder>(raw, "sort order"))
        .transpose()?;
    match (&args.sort_by, order) {
        (Some(field), order) => {
            query = query.sort(field, order.unwrap_or(general.default_sort_order));
        }
        (None, Some(order)) => query.sort_order = Some(order),
        (None, None) => {}
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::cli::OutputFormat;

    use super::*;

    fn flags(limit: Option<u32>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn sort_by_uses_configured_order() {
        let args = ListArgs {
            page: 2,
            sort_by: Some("createdAt".into()),
            ..Default::default()
        };
        let query = list_query(&args, &flags(Some(5)), &GeneralConfig::default()).unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 5);
        assert_eq!(query.sort_order, Some(SortOrder::Desc));
    }

    #[test]
    fn explicit_sort_order_wins() {
        let args = ListArgs {
            page: 1,
            sort_by: Some("name".into()),
            sort_order: Some("ASC".into()),
            ..Default::default()
        };
        let query = list_query(&args, &flags(None), &GeneralConfig::default()).unwrap();
        assert_eq!(query.sort_order, Some(SortOrder::Asc));
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn bad_sort_order_is_an_error() {
        let args = ListArgs {
            sort_order: Some("sideways".into()),
            ..Default::default()
        };
        assert!(list_query(&args, &flags(None), &GeneralConfig::default()).is_err());
    }
}
