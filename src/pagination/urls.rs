/// Append `param=page`, using `&` when the URL already has a query
pub fn with_page_param(base_url: &str, param: &str, page: usize) -> String {
    let separator = determine_separator(base_url);
    format!("{}{}{}={}", base_url, separator, param, page)
}

fn determine_separator(url: &str) -> char {
    if url.contains('?') { '&' } else { '?' }
}
