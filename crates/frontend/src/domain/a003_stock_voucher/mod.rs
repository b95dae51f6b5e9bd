pub mod ui;

use contracts::domain::a003_stock_voucher::StockVoucher;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_voucher(id: i64) -> Result<StockVoucher, String> {
    let url = api_url(&format!("/api/stock-vouchers/{}", id));
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => response
            .json::<StockVoucher>()
            .await
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}
