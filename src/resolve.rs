/// Converts a Wikipedia article URL to the DBpedia resource URL, for example
/// `http://en.wikipedia.org/wiki/Jazz_Gillum` -> `http://dbpedia.org/resource/Jazz_Gillum` with the default `resource_base`.
/// Any URL that contains "wikipedia" counts, wherever it occurs. Everything else is assumed to be a resource URL already and returned as is.
/// No validation takes place.
pub fn dbpedia_url(url: &str, resource_base: &str) -> String {
    if !url.contains("wikipedia") {
        return url.to_owned();
    }
    let title = url.rsplit('/').next().unwrap_or_default();
    format!("{resource_base}{title}")
}
