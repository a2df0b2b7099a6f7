/// Render bytes as lowercase hex, two zero-padded digits per byte.
pub fn encode_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
