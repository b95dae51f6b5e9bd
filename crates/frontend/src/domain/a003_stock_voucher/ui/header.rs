//! Read-only voucher summary card shown above the line-item editor.

use contracts::domain::a003_stock_voucher::StockVoucher;
use leptos::prelude::*;

use crate::shared::format::format_date;

#[component]
pub fn VoucherHeader(voucher: StockVoucher) -> impl IntoView {
    view! {
        <div class="card voucher-header" style="margin-bottom:var(--spacing-md);">
            <h4 class="details-section__title">{voucher.stock_type.label()}</h4>
            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Voucher no"</label>
                    <span class="form__value">{voucher.voucher_no.clone()}</span>
                </div>
                <div class="form__group">
                    <label class="form__label">"Vendor"</label>
                    <span class="form__value">{voucher.vendor_name.clone()}</span>
                </div>
                <div class="form__group">
                    <label class="form__label">"Invoice no"</label>
                    <span class="form__value">{voucher.invoice_no.clone()}</span>
                </div>
                <div class="form__group">
                    <label class="form__label">"Invoice date"</label>
                    <span class="form__value">{format_date(&voucher.invoice_date)}</span>
                </div>
                <div class="form__group">
                    <label class="form__label">"Created"</label>
                    <span class="form__value">
                        {voucher.created_at.format("%d.%m.%Y %H:%M").to_string()}
                    </span>
                </div>
            </div>
        </div>
    }
}
