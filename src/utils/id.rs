use crate::constants::BOUNDARY_LENGTH;

/// Generates a random multipart boundary
///
/// The boundary is a 30-character string of uppercase letters and digits
/// generated with `nanoid`, which cannot clash with the XML metadata and is
/// vanishingly unlikely to appear in a datasource file.
///
/// # Examples
/// ```
/// use tableau_client::utils::id::generate_boundary;
/// let boundary = generate_boundary();
/// assert_eq!(boundary.len(), 30);
/// ```
pub fn generate_boundary() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(BOUNDARY_LENGTH, &alphabet)
}
