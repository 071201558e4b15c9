use reqwest::header::{HeaderMap, LINK};
use url::Url;

/// Page number of the `rel="last"` entry of the `Link` header, `None` when there is no such entry.
///
/// `<https://api.github.com/repositories/1/commits?per_page=1&page=2>; rel="next",
///  <https://api.github.com/repositories/1/commits?per_page=1&page=6000>; rel="last"` gives `6000`.
pub(crate) fn last_page(headers: &HeaderMap) -> Result<Option<u64>, String> {
    let link = match headers.get(LINK) {
        Some(link) => link.to_str().map_err(|err| err.to_string())?,
        None => return Ok(None),
    };
    for entry in link.split(',') {
        let mut params = entry.split(';');
        let target = params.next().unwrap_or_default().trim();
        if !params.any(is_last_relation) {
            continue;
        }
        let target = target
            .strip_prefix('<')
            .and_then(|target| target.strip_suffix('>'))
            .ok_or_else(|| format!("malformed link target {}", target))?;
        let url = Url::parse(target).map_err(|err| format!("{}: {}", target, err))?;
        let (_, page) = url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .ok_or_else(|| format!("{} has no page parameter", target))?;
        return page
            .parse::<u64>()
            .map(Some)
            .map_err(|err| format!("{}: {}", target, err));
    }
    Ok(None)
}

fn is_last_relation(param: &str) -> bool {
    match param.trim().split_once('=') {
        Some((key, value)) => {
            key.trim().eq_ignore_ascii_case("rel") && value.trim().trim_matches('"').split_whitespace().any(|rel| rel == "last")
        }
        None => false,
    }
}
