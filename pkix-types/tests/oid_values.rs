use shomei_pkix_types::{Name, NameAttribute, get_use_oid_values, oid, set_use_oid_values};

// The flag is process-wide, so everything touching it lives in this one test.
#[test]
fn test_use_oid_values_switches_name_rendering() {
    let name = Name::new(vec![
        NameAttribute::new(oid::COUNTRY_NAME, "JP"),
        NameAttribute::new(oid::COMMON_NAME, "shomei.example"),
    ]);

    assert!(!get_use_oid_values());
    assert_eq!(
        serde_json::to_string(&name).unwrap(),
        r#"[{"oid":"countryName","value":"JP"},{"oid":"commonName","value":"shomei.example"}]"#
    );

    set_use_oid_values(true);
    assert!(get_use_oid_values());
    assert_eq!(
        serde_json::to_string(&name).unwrap(),
        r#"[{"oid":"2.5.4.6","value":"JP"},{"oid":"2.5.4.3","value":"shomei.example"}]"#
    );

    // Display is unaffected by the serialization switch
    assert_eq!(name.to_string(), "C=JP, CN=shomei.example");

    set_use_oid_values(false);
}
