use contracts::domain::a003_stock_voucher::StockVoucher;
use leptos::prelude::*;

use crate::domain::a005_chem_stock_item::ChemItemSpec;
use crate::domain::a003_stock_voucher::ui::VoucherHeader;
use crate::shared::line_editor::widget::line_item_editor;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::printing::status_bar::PrinterStatusBar;

#[component]
pub fn ChemStockPage(voucher: StockVoucher) -> impl IntoView {
    let title = format!("Chemical stock entry {}", voucher.voucher_no);

    view! {
        <PageFrame page_id="a005_chem_stock_item--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2 class="page__title">{title}</h2>
            </div>
            <VoucherHeader voucher=voucher.clone()/>
            {line_item_editor::<ChemItemSpec>(voucher)}
            <PrinterStatusBar/>
        </PageFrame>
    }
}
