//! `X-Total-Count` and RFC 5988 `Link` headers for paged collections.

use axum::http::{HeaderMap, HeaderName, HeaderValue, Uri, header};
use database::pagination::Page;

pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Builds the pagination headers for `page`, linking relative to `uri`.
///
/// Links come in the order next, prev, last, first; next and prev only when
/// such a page exists. Every other query parameter of `uri` is kept and
/// `page`/`size` are moved to the end.
pub fn pagination_headers<T>(uri: &Uri, page: &Page<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT, HeaderValue::from(page.total));

    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(link(uri, page.page + 1, page.size, "next"));
    }
    if page.has_previous() {
        links.push(link(uri, page.page - 1, page.size, "prev"));
    }
    let last = page.total_pages().saturating_sub(1);
    links.push(link(uri, last, page.size, "last"));
    links.push(link(uri, 0, page.size, "first"));

    match HeaderValue::from_str(&links.join(",")) {
        Ok(value) => {
            headers.insert(header::LINK, value);
        }
        Err(e) => tracing::warn!(error = %e, "skipping unrepresentable Link header"),
    }

    headers
}

fn link(uri: &Uri, page: u64, size: u64, rel: &str) -> String {
    format!("<{}>; rel=\"{}\"", page_uri(uri, page, size), rel)
}

fn page_uri(uri: &Uri, page: u64, size: u64) -> String {
    let mut params: Vec<String> = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or_default();
            key != "page" && key != "size"
        })
        .map(str::to_owned)
        .collect();
    params.push(format!("page={page}"));
    params.push(format!("size={size}"));

    format!("{}?{}", uri.path(), params.join("&"))
        .replace(',', "%2C")
        .replace(';', "%3B")
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::pagination::PageRequest;

    fn page(page: u64, size: u64, total: u64) -> Page<()> {
        Page::new(Vec::new(), total, &PageRequest::new(page, size))
    }

    fn link_header(headers: &HeaderMap) -> &str {
        headers[header::LINK].to_str().unwrap()
    }

    #[test]
    fn middle_page_links_every_direction() {
        let uri: Uri = "/api/missions?page=1&size=2".parse().unwrap();
        let headers = pagination_headers(&uri, &page(1, 2, 5));

        assert_eq!(headers[X_TOTAL_COUNT], "5");
        assert_eq!(
            link_header(&headers),
            "</api/missions?page=2&size=2>; rel=\"next\",\
             </api/missions?page=0&size=2>; rel=\"prev\",\
             </api/missions?page=2&size=2>; rel=\"last\",\
             </api/missions?page=0&size=2>; rel=\"first\""
        );
    }

    #[test]
    fn empty_collection_only_links_last_and_first() {
        let uri: Uri = "/api/space-events".parse().unwrap();
        let headers = pagination_headers(&uri, &page(0, 20, 0));

        assert_eq!(headers[X_TOTAL_COUNT], "0");
        assert_eq!(
            link_header(&headers),
            "</api/space-events?page=0&size=20>; rel=\"last\",\
             </api/space-events?page=0&size=20>; rel=\"first\""
        );
    }

    #[test]
    fn other_parameters_survive_and_are_encoded() {
        let uri: Uri = "/api/missions?sort=id,desc&page=0&size=1".parse().unwrap();
        let headers = pagination_headers(&uri, &page(0, 1, 2));

        let link = link_header(&headers);
        assert!(link.starts_with("</api/missions?sort=id%2Cdesc&page=1&size=1>; rel=\"next\""));
        assert!(!link.contains("rel=\"prev\""));
    }
}
