//! Price query URL construction. Nothing here touches the network.

use crate::resolver::Resolution;

/// Builds `{base_url}/{ids}.xml?locations={locations}`.
///
/// Every record contributes its identifier (unresolved ones contribute the
/// `Unknown item` sentinel), in record order. Identifiers and locations are
/// joined with `,` and are not escaped. A trailing `/` on `base_url` is
/// dropped so it is not doubled.
pub fn build_query_url<S: AsRef<str>>(base_url: &str, records: &[Resolution], locations: &[S]) -> String {
    let ids = records
        .iter()
        .map(Resolution::api_name_or_unknown)
        .collect::<Vec<_>>()
        .join(",");
    let locations = locations
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<&str>>()
        .join(",");
    format!(
        "{}/{}.xml?locations={}",
        base_url.trim_end_matches('/'),
        ids,
        locations
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://albion-online-data.com/api/v2/stats/prices";

    fn rec(item: &str, api: Option<&str>) -> Resolution {
        Resolution {
            item: item.to_string(),
            api_name: api.map(str::to_string),
        }
    }

    #[test]
    fn joins_ids_and_locations() {
        let url = build_query_url(
            BASE,
            &[rec("a", Some("T4_BREAD")), rec("b", Some("T5_MEAL_PIE@1"))],
            &["Martlock", "Fort Sterling"],
        );
        assert_eq!(
            url,
            "https://albion-online-data.com/api/v2/stats/prices/T4_BREAD,T5_MEAL_PIE@1.xml?locations=Martlock,Fort Sterling"
        );
    }

    #[test]
    fn unknown_items_are_kept_verbatim() {
        let url = build_query_url(BASE, &[rec("x", None), rec("y", Some("T4_MILK"))], &["Caerleon"]);
        assert!(url.ends_with("/Unknown item,T4_MILK.xml?locations=Caerleon"));
    }

    #[test]
    fn order_follows_records() {
        let a = rec("a", Some("A"));
        let b = rec("b", Some("B"));
        let forward = build_query_url(BASE, &[a.clone(), b.clone()], &["L"]);
        let backward = build_query_url(BASE, &[b, a], &["L"]);
        assert!(forward.contains("/A,B.xml"));
        assert!(backward.contains("/B,A.xml"));
    }

    #[test]
    fn empty_inputs_and_trailing_slash() {
        let url = build_query_url::<&str>("http://host/prices/", &[], &[]);
        assert_eq!(url, "http://host/prices/.xml?locations=");
    }
}
