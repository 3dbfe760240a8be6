/// Metric counters pass through verbatim; an absent counter shows nothing.
pub fn format_metric(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_metric;

    #[test]
    fn present_values_render_verbatim() {
        assert_eq!(format_metric(Some(120)), "120");
        assert_eq!(format_metric(Some(0)), "0");
    }

    #[test]
    fn absent_values_render_empty() {
        assert_eq!(format_metric(None), "");
    }
}
