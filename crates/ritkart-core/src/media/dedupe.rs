//! Duplicate detection over hosted assets.

use std::collections::HashMap;

use super::MediaAsset;

/// Assets that share identical bytes, dimensions and format. The keeper is
/// the first asset seen in the listing; the rest are deletable duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub keeper: MediaAsset,
    pub duplicates: Vec<MediaAsset>,
}

impl DuplicateGroup {
    pub fn duplicate_ids(&self) -> Vec<String> {
        self.duplicates.iter().map(|a| a.public_id.clone()).collect()
    }
}

/// Group assets by `(bytes, width, height, format)` and report every group
/// with more than one member, in first-seen order.
pub fn find_duplicates(assets: &[MediaAsset]) -> Vec<DuplicateGroup> {
    let mut order: Vec<(u64, u32, u32, String)> = Vec::new();
    let mut groups: HashMap<(u64, u32, u32, String), Vec<&MediaAsset>> = HashMap::new();

    for asset in assets {
        let key = (asset.bytes, asset.width, asset.height, asset.format.clone());
        let group = groups.entry(key.clone()).or_default();
        if group.is_empty() {
            order.push(key);
        }
        group.push(asset);
    }

    order
        .into_iter()
        .filter_map(|key| {
            let group = groups.remove(&key)?;
            if group.len() < 2 {
                return None;
            }
            let mut iter = group.into_iter().cloned();
            let keeper = iter.next()?;
            Some(DuplicateGroup { keeper, duplicates: iter.collect() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(public_id: &str, bytes: u64, width: u32, height: u32, format: &str) -> MediaAsset {
        MediaAsset {
            public_id: public_id.to_string(),
            format: format.to_string(),
            width,
            height,
            bytes,
            secure_url: format!("https://media.example.com/{public_id}.{format}"),
        }
    }

    #[test]
    fn identical_assets_grouped_keeper_first() {
        let assets = vec![
            asset("ritkart/a", 72_754, 800, 800, "jpg"),
            asset("ritkart/b", 72_754, 800, 800, "jpg"),
            asset("ritkart/c", 72_754, 800, 800, "jpg"),
        ];
        let groups = find_duplicates(&assets);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].keeper.public_id, "ritkart/a");
        assert_eq!(groups[0].duplicate_ids(), vec!["ritkart/b", "ritkart/c"]);
    }

    #[test]
    fn different_dimensions_are_not_duplicates() {
        let assets = vec![
            asset("ritkart/a", 72_754, 800, 800, "jpg"),
            asset("ritkart/b", 72_754, 600, 600, "jpg"),
            asset("ritkart/c", 10_000, 800, 800, "jpg"),
            asset("ritkart/d", 72_754, 800, 800, "png"),
        ];
        assert!(find_duplicates(&assets).is_empty());
    }

    #[test]
    fn groups_reported_in_first_seen_order() {
        let assets = vec![
            asset("ritkart/x1", 100, 10, 10, "jpg"),
            asset("ritkart/y1", 200, 20, 20, "jpg"),
            asset("ritkart/y2", 200, 20, 20, "jpg"),
            asset("ritkart/x2", 100, 10, 10, "jpg"),
        ];
        let groups = find_duplicates(&assets);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].keeper.public_id, "ritkart/x1");
        assert_eq!(groups[1].keeper.public_id, "ritkart/y1");
    }

    #[test]
    fn empty_listing_has_no_duplicates() {
        assert!(find_duplicates(&[]).is_empty());
    }
}
