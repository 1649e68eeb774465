//! Google Play fetchers.
//!
//! Reviews come from the `batchexecute` RPC the Play web UI uses: the
//! response is an anti-JSON-prefixed envelope whose payload is a JSON
//! string containing positional arrays. App metadata comes from the JSON-LD
//! block embedded in the public app page, which is far more stable than the
//! positional details RPC; install and review counts only exist in the
//! page's embedded `ds:5` details blob and are dug out positionally.

use serde_json::Value;
use storescout_core::{AppInfo, Platform, SortOrder, is_valid_country, is_valid_package_name};

use crate::client::StoreClient;
use crate::error::FetchError;
use crate::types::{PlayReview, RawReview};

const PLAY_BASE: &str = "https://play.google.com";
const BATCHEXECUTE_PATH: &str = "/_/PlayStoreUi/data/batchexecute";
const REVIEWS_RPC_ID: &str = "UsvDTd";

/// Anti-hijacking prefix Google puts in front of every batchexecute response.
const ANTI_JSON_PREFIX: &str = ")]}'";

fn sort_param(sort: SortOrder) -> u8 {
    match sort {
        SortOrder::Helpfulness => 1,
        SortOrder::Newest => 2,
        SortOrder::Rating => 3,
    }
}

fn validate(app_id: &str, country: &str) -> Result<(), FetchError> {
    if !is_valid_package_name(app_id) {
        return Err(FetchError::InvalidIdentifier {
            id: app_id.to_string(),
            expected: Platform::PlayStore.identifier_hint(),
        });
    }
    if !is_valid_country(country) {
        return Err(FetchError::InvalidCountry(country.to_string()));
    }
    Ok(())
}

/// Fetch app metadata from the public app page's JSON-LD block.
pub fn fetch_app_info(
    client: &StoreClient,
    app_id: &str,
    country: &str,
    lang: &str,
) -> Result<AppInfo, FetchError> {
    validate(app_id, country)?;

    let url = format!("{PLAY_BASE}/store/apps/details?id={app_id}&hl={lang}&gl={country}");
    let html = client.get_text(&url)?;

    let block = extract_json_ld(&html).ok_or_else(|| {
        FetchError::UpstreamFormat("no JSON-LD metadata block on app page".to_string())
    })?;
    let doc: Value = serde_json::from_str(block)
        .map_err(|e| FetchError::UpstreamFormat(format!("failed to parse JSON-LD block: {e}")))?;

    let title = doc
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| FetchError::UpstreamFormat("JSON-LD block has no app name".to_string()))?
        .to_string();
    let developer = doc
        .pointer("/author/name")
        .and_then(Value::as_str)
        .unwrap_or("N/A")
        .to_string();
    let rating = doc
        .pointer("/aggregateRating/ratingValue")
        .and_then(json_number);
    let ratings_count = doc
        .pointer("/aggregateRating/ratingCount")
        .and_then(json_count);
    let description = doc
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    // Counts the JSON-LD block doesn't carry; absent when the blob moves.
    let details = extract_page_data(&html, "ds:5");
    let installs = details.as_ref().and_then(details_installs);
    let reviews_count = details.as_ref().and_then(details_reviews_count);

    Ok(AppInfo {
        app_id: app_id.to_string(),
        title,
        developer,
        rating,
        ratings_count,
        reviews_count,
        installs,
        description,
        platform: Platform::PlayStore,
    })
}

/// Fetch up to `count` raw reviews for one (app, country) pair.
pub fn fetch_reviews(
    client: &StoreClient,
    app_id: &str,
    country: &str,
    lang: &str,
    count: usize,
    sort: SortOrder,
) -> Result<Vec<RawReview>, FetchError> {
    validate(app_id, country)?;

    let url = format!("{PLAY_BASE}{BATCHEXECUTE_PATH}?hl={lang}&gl={country}");
    let request = reviews_request(app_id, count, sort);
    let text = client.post_form(&url, &[("f.req", request)])?;

    let payload = rpc_payload(&text, REVIEWS_RPC_ID)?;
    let items = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::UpstreamFormat("review list missing from payload".to_string()))?;

    Ok(items
        .iter()
        .take(count)
        .map(|item| RawReview::Play(decode_review(item)))
        .collect())
}

/// Build the `f.req` body for the reviews RPC.
fn reviews_request(app_id: &str, count: usize, sort: SortOrder) -> String {
    let inner = format!(
        "[null,null,[2,{},[{count},null,null],null,[]],[\"{app_id}\",7]]",
        sort_param(sort)
    );
    let inner_escaped = inner.replace('"', "\\\"");
    format!("[[[\"{REVIEWS_RPC_ID}\",\"{inner_escaped}\",null,\"generic\"]]]")
}

/// Strip the anti-JSON prefix and locate the payload string for an RPC id.
///
/// The envelope is `[["wrb.fr", "<rpc id>", "<payload json string>", ...], ...]`;
/// the payload string itself parses into the positional-array document.
fn rpc_payload(text: &str, rpc_id: &str) -> Result<Value, FetchError> {
    let stripped = text.strip_prefix(ANTI_JSON_PREFIX).unwrap_or(text);
    let envelope: Value = serde_json::from_str(stripped.trim_start())
        .map_err(|e| FetchError::UpstreamFormat(format!("failed to parse envelope: {e}")))?;

    let frame = envelope
        .as_array()
        .into_iter()
        .flatten()
        .find(|frame| {
            frame.get(0).and_then(Value::as_str) == Some("wrb.fr")
                && frame.get(1).and_then(Value::as_str) == Some(rpc_id)
        })
        .ok_or_else(|| {
            FetchError::UpstreamFormat(format!("no '{rpc_id}' frame in envelope"))
        })?;

    let payload = frame.get(2).and_then(Value::as_str).ok_or_else(|| {
        FetchError::UpstreamFormat(format!("'{rpc_id}' frame carries no payload"))
    })?;

    serde_json::from_str(payload)
        .map_err(|e| FetchError::UpstreamFormat(format!("failed to parse payload: {e}")))
}

/// Decode one positional review array into a `PlayReview`.
///
/// Index map (as used by the Play web UI):
/// `[0]` id, `[1][0]` user name, `[2]` score, `[4]` text,
/// `[5][0]` timestamp seconds, `[6]` thumbs up, `[7][1]` reply text.
/// Missing or shifted fields stay `None`; the normalizer decides whether the
/// record is still usable.
fn decode_review(item: &Value) -> PlayReview {
    PlayReview {
        review_id: item.get(0).and_then(Value::as_str).map(str::to_string),
        user_name: item
            .pointer("/1/0")
            .and_then(Value::as_str)
            .map(str::to_string),
        score: item.get(2).and_then(Value::as_i64),
        timestamp: item.pointer("/5/0").and_then(Value::as_i64),
        text: item.get(4).and_then(Value::as_str).map(str::to_string),
        thumbs_up: item.get(6).and_then(Value::as_i64),
        reply_text: item
            .pointer("/7/1")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

fn json_number(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

fn json_count(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

/// Index map for the `ds:5` details blob (as used by the Play web UI):
/// `[1][2][13][0]` install-count string, `[1][2][51][3][1]` review count.
fn details_installs(data: &Value) -> Option<String> {
    data.pointer("/1/2/13/0")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn details_reviews_count(data: &Value) -> Option<u64> {
    data.pointer("/1/2/51/3/1").and_then(json_count)
}

/// Pull the `data:` array out of the `AF_initDataCallback({key: '<key>', ...})`
/// script block the app page embeds for its own UI.
fn extract_page_data(html: &str, key: &str) -> Option<Value> {
    let key_pos = html.find(&format!("key: '{key}'"))?;
    let rest = &html[key_pos..];
    let data_pos = rest.find("data:")?;
    let array_start = data_pos + rest[data_pos..].find('[')?;
    let body = balanced_array(&rest[array_start..])?;
    serde_json::from_str(body).ok()
}

/// The array literal starting at `text[0] == '['`, spanning nested brackets
/// and ignoring bracket characters inside string literals.
fn balanced_array(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Pull the first `<script type="application/ld+json">` block out of a page.
fn extract_json_ld(html: &str) -> Option<&str> {
    let start = html.find(r#"<script type="application/ld+json""#)?;
    let rest = &html[start..];
    let open = rest.find('>')? + 1;
    let close = rest.find("</script>")?;
    if close <= open {
        return None;
    }
    Some(rest[open..close].trim())
}
