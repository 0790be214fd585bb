/// Human readable byte count: `512 B`, `1.5 KB`, `2.0 MB`.
pub fn format_bytes(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = bytes as f64;
    if value < KB {
        format!("{} B", bytes)
    } else if value < MB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{:.1} MB", value / MB)
    }
}

/// Cloud weight with one decimal, as shown next to a term.
pub fn format_weight(weight: f64) -> String {
    format!("{:.1}", weight)
}
