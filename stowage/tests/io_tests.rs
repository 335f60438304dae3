#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use stowage::entities::Container;
    use stowage::io::ext_repr::{ExtContainer, ExtItem, ExtPackResult};
    use stowage::io::{export, import};

    #[test]
    fn missing_weights_take_defaults() {
        let ext_items: Vec<ExtItem> =
            serde_json::from_str(r#"[{"dimensions": [1, 2, 3]}, {"dimensions": [4, 5, 6], "weight": 2.5}]"#)
                .unwrap();
        let items = import::import_items(&ext_items).unwrap();
        assert_eq!(items[0].weight, 0.0);
        assert_eq!(items[1].weight, 2.5);

        let ext_container: ExtContainer = serde_json::from_str(r#"{"dimensions": [10, 10, 10]}"#).unwrap();
        let container = import::import_container(&ext_container).unwrap();
        assert!(container.weight_limit.is_infinite());
    }

    #[test]
    fn invalid_item_is_reported_by_index() {
        let ext_items = vec![
            ExtItem { dimensions: [1.0, 1.0, 1.0], weight: None },
            ExtItem { dimensions: [1.0, -1.0, 1.0], weight: None },
        ];
        let err = import::import_items(&ext_items).unwrap_err();
        assert!(format!("{err:#}").contains("invalid item 1"));
        assert!(import::import_items(&[]).is_err());
        assert!(import::import_limit([1.0, 0.0, 1.0]).is_err());
    }

    #[test]
    fn unbounded_limit_is_omitted() {
        let ext = export::export_container(&Container::unbounded([1.0, 2.0, 3.0]));
        assert_eq!(ext.weight_limit, None);
        let json = serde_json::to_string(&ext).unwrap();
        assert!(!json.contains("weight_limit"));

        let ext = export::export_container(&Container::new([1.0, 2.0, 3.0], 7.0));
        assert_eq!(ext.weight_limit, Some(7.0));
    }

    #[test]
    fn exported_result_survives_json() {
        let ext_container = ExtContainer { dimensions: [10.0, 10.0, 10.0], weight_limit: Some(3.0) };
        let ext_items = vec![
            ExtItem { dimensions: [5.0, 5.0, 5.0], weight: Some(2.0) },
            ExtItem { dimensions: [5.0, 5.0, 5.0], weight: Some(2.0) },
            ExtItem { dimensions: [1.0, 1.0, 1.0], weight: Some(4.0) },
        ];
        let container = import::import_container(&ext_container).unwrap();
        let items = import::import_items(&ext_items).unwrap();
        let result = stowage::pack(&container, &items).unwrap();

        let ext_result = export::export_pack_result(&container, &result);
        assert_eq!(ext_result.packings.len(), 2);
        assert_eq!(ext_result.errors.len(), 1);
        assert!(ext_result.errors[0].starts_with("item 2"));
        assert!(approx_eq!(f64, ext_result.packings[0].density, 0.125));

        let json = serde_json::to_string(&ext_result).unwrap();
        let parsed: ExtPackResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ext_result);
    }
}
