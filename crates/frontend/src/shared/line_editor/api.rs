//! REST client for the line-item editor and its catalog collaborators.
//!
//! All calls return `Result<T, String>`; the widget surfaces the message
//! into the page error banner.

use contracts::domain::a001_item::{Item, NewItem};
use contracts::domain::a002_uom::{NewUom, Uom, DEFAULT_UOM_NAME};
use gloo_net::http::Request;

use super::LineItemSpec;
use crate::shared::api_utils::api_url;

pub async fn fetch_rows<S: LineItemSpec>(voucher_id: i64) -> Result<Vec<S::Draft>, String> {
    let url = api_url(&format!(
        "{}?voucher_id={}",
        S::collection_path(),
        voucher_id
    ));
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => response
            .json::<Vec<S::Record>>()
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn create_row<S: LineItemSpec>(
    voucher_id: i64,
    draft: &S::Draft,
) -> Result<S::Draft, String> {
    let url = api_url(S::collection_path());
    let request = Request::post(&url)
        .json(&S::create_body(voucher_id, draft))
        .map_err(|e| format!("Request error: {}", e))?;
    match request.send().await {
        Ok(response) if response.ok() => response
            .json::<S::Record>()
            .await
            .map(Into::into)
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn update_row<S: LineItemSpec>(id: i64, draft: &S::Draft) -> Result<S::Draft, String> {
    let url = api_url(&format!("{}/{}", S::collection_path(), id));
    let request = Request::put(&url)
        .json(&S::update_body(draft))
        .map_err(|e| format!("Request error: {}", e))?;
    match request.send().await {
        Ok(response) if response.ok() => response
            .json::<S::Record>()
            .await
            .map(Into::into)
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn delete_row<S: LineItemSpec>(id: i64) -> Result<(), String> {
    let url = api_url(&format!("{}/{}", S::collection_path(), id));
    match Request::delete(&url).send().await {
        Ok(response) if response.ok() => Ok(()),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn fetch_items(group: &str) -> Result<Vec<Item>, String> {
    let url = api_url(&format!("/api/items?group={}", urlencoding::encode(group)));
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => response
            .json::<Vec<Item>>()
            .await
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn create_item(new_item: &NewItem) -> Result<Item, String> {
    let url = api_url("/api/items");
    let request = Request::post(&url)
        .json(new_item)
        .map_err(|e| format!("Request error: {}", e))?;
    match request.send().await {
        Ok(response) if response.ok() => response
            .json::<Item>()
            .await
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn fetch_uoms() -> Result<Vec<Uom>, String> {
    let url = api_url("/api/uoms");
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => response
            .json::<Vec<Uom>>()
            .await
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn create_uom(name: &str) -> Result<Uom, String> {
    let url = api_url("/api/uoms");
    let request = Request::post(&url)
        .json(&NewUom {
            name: name.to_string(),
        })
        .map_err(|e| format!("Request error: {}", e))?;
    match request.send().await {
        Ok(response) if response.ok() => response
            .json::<Uom>()
            .await
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

/// Picks the UOM inline-created items are seeded with: the well-known
/// default name if present, else the first entry.
pub fn default_uom(uoms: &[Uom]) -> Option<&Uom> {
    uoms.iter()
        .find(|u| u.name.eq_ignore_ascii_case(DEFAULT_UOM_NAME))
        .or_else(|| uoms.first())
}

/// Resolves the default UOM, creating it when the catalog has none.
pub async fn ensure_default_uom() -> Result<Uom, String> {
    let uoms = fetch_uoms().await?;
    if let Some(uom) = default_uom(&uoms) {
        return Ok(uom.clone());
    }
    create_uom(DEFAULT_UOM_NAME).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uom_prefers_well_known_name() {
        let uoms = vec![
            Uom {
                id: 1,
                name: "mtr".into(),
            },
            Uom {
                id: 2,
                name: "Kgs".into(),
            },
        ];
        assert_eq!(default_uom(&uoms).unwrap().id, 2);
    }

    #[test]
    fn test_default_uom_falls_back_to_first() {
        let uoms = vec![Uom {
            id: 5,
            name: "ltr".into(),
        }];
        assert_eq!(default_uom(&uoms).unwrap().id, 5);
        assert!(default_uom(&[]).is_none());
    }
}
