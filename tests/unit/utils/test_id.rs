use tableau_client::utils::id::generate_boundary;

#[test]
fn test_generate_boundary_shape() {
    let boundary = generate_boundary();
    assert_eq!(boundary.len(), 30);
    assert!(
        boundary
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );
}

#[test]
fn test_generate_boundary_is_random() {
    assert_ne!(generate_boundary(), generate_boundary());
}
