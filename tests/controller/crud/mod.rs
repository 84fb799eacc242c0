mod integrated_order;
mod marketplace_account;
mod product_account;
mod shipping_program;
