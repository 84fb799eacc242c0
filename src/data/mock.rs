//! In-memory fallback datasets served when the dictionary tables are not
//! provisioned.
//!
//! One instance lives in [`crate::model::app::AppState`]; it implements the
//! same [`AliasStore`] contract as the persistent adapter so handlers stay
//! oblivious to which one is behind them. The lock guards memory safety
//! only: a handler's read-then-write sequence is not isolated, which is
//! acceptable for a fallback/test dataset.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    data::store::AliasStore,
    error::Error,
    model::{
        api::{CustomerLookupDto, OrderChildrenDto},
        dictionary::{value_string, AliasRow},
    },
    util::time::today_ymd,
};

struct MockData {
    datasets: HashMap<String, Vec<AliasRow>>,
    order_children: HashMap<String, OrderChildrenDto>,
    customers: Vec<CustomerLookupDto>,
}

/// Process-wide mock dataset mirroring the seeded alias shapes.
#[derive(Clone)]
pub struct MockStore {
    inner: Arc<RwLock<MockData>>,
}

fn rows(values: Vec<Value>) -> Vec<AliasRow> {
    values
        .into_iter()
        .filter_map(|value| value.as_object().cloned())
        .collect()
}

impl MockStore {
    pub fn new() -> Self {
        let today = today_ymd();

        let mut datasets = HashMap::new();
        datasets.insert(
            "Z10".to_string(),
            rows(vec![
                json!({ "Z10_COD": "PLAT001", "Z10_DESC": "Mercado Livre", "Z10_ATIVO": "S", "Z10_DTALT": today.clone() }),
                json!({ "Z10_COD": "PLAT002", "Z10_DESC": "Shopee", "Z10_ATIVO": "S", "Z10_DTALT": today.clone() }),
            ]),
        );
        datasets.insert(
            "Z11".to_string(),
            rows(vec![
                json!({ "Z11_COD": "ENV001", "Z11_DESC": "Entrega Expressa", "Z11_PRAZO": 2, "Z11_ATIVO": "S" }),
                json!({ "Z11_COD": "ENV002", "Z11_DESC": "Entrega Economica", "Z11_PRAZO": 6, "Z11_ATIVO": "S" }),
            ]),
        );
        datasets.insert(
            "Z00".to_string(),
            rows(vec![
                json!({ "Z00_COD": "ACC001", "Z00_DESC": "Conta Principal ML", "Z00_TOKEN": "token-ml-001", "Z00_STATUS": "A" }),
                json!({ "Z00_COD": "ACC002", "Z00_DESC": "Conta Shopee Sul", "Z00_TOKEN": "token-shp-002", "Z00_STATUS": "A" }),
            ]),
        );
        datasets.insert(
            "Z01".to_string(),
            rows(vec![
                json!({ "Z01_COD": "1", "Z01_PRDERP": "PRD001", "Z01_DESCER": "Camisa Polo", "Z01_CONTA": "ACC001", "Z01_SKU": "SKU-ML-001", "Z01_ATIVO": "S" }),
                json!({ "Z01_COD": "2", "Z01_PRDERP": "PRD001", "Z01_DESCER": "Camisa Polo", "Z01_CONTA": "ACC002", "Z01_SKU": "SKU-SHP-044", "Z01_ATIVO": "S" }),
                json!({ "Z01_COD": "3", "Z01_PRDERP": "PRD002", "Z01_DESCER": "Tenis Esportivo", "Z01_CONTA": "ACC001", "Z01_SKU": "SKU-ML-777", "Z01_ATIVO": "S" }),
            ]),
        );
        datasets.insert(
            "Z02".to_string(),
            rows(vec![
                json!({
                    "Z02_COD": "INT001",
                    "Z02_IDPED": "PED-1001",
                    "Z02_IDINT": "I1001",
                    "Z02_PEDIDO": "4500012345",
                    "Z02_CLIENT": "000001",
                    "Z02_LOJA": "01",
                    "Z02_STATUS": "PROC",
                    "Z02_ULTATT": today.clone()
                }),
                json!({
                    "Z02_COD": "INT002",
                    "Z02_IDPED": "PED-1002",
                    "Z02_IDINT": "I1002",
                    "Z02_PEDIDO": "4500012346",
                    "Z02_CLIENT": "000002",
                    "Z02_LOJA": "01",
                    "Z02_STATUS": "NOVO",
                    "Z02_ULTATT": today.clone()
                }),
            ]),
        );
        datasets.insert(
            "Z04".to_string(),
            rows(vec![
                json!({ "Z04_COD": "LOG001", "Z04_DTHORA": today.clone(), "Z04_TIPO": "INFO", "Z04_STATUS": "OK", "Z04_MSG": "Integracao concluida" }),
                json!({ "Z04_COD": "LOG002", "Z04_DTHORA": today.clone(), "Z04_TIPO": "ERRO", "Z04_STATUS": "FALHA", "Z04_MSG": "Falha no envio para marketplace" }),
            ]),
        );

        let mut order_children = HashMap::new();
        order_children.insert(
            "PED-1001|I1001".to_string(),
            OrderChildrenDto {
                items: rows(vec![json!({
                    "Z03_ITEM": "001", "Z03_PROD": "PRD001", "Z03_DESC": "Camisa Polo", "Z03_QTD": 2, "Z03_VLR": 99.9
                })]),
                payments: rows(vec![json!({
                    "Z05_FORMA": "PIX", "Z05_VALOR": 199.8, "Z05_STATUS": "PAGO"
                })]),
                invoices: rows(vec![json!({
                    "Z06_DOC": "NF001", "Z06_SERIE": "1", "Z06_VALOR": 199.8, "Z06_STATUS": "EMITIDO"
                })]),
            },
        );

        let customers = vec![
            CustomerLookupDto {
                a1_cod: "000001".to_string(),
                a1_loja: "01".to_string(),
                a1_nome: "Cliente Mock 1".to_string(),
            },
            CustomerLookupDto {
                a1_cod: "000002".to_string(),
                a1_loja: "01".to_string(),
                a1_nome: "Cliente Mock 2".to_string(),
            },
            CustomerLookupDto {
                a1_cod: "000003".to_string(),
                a1_loja: "02".to_string(),
                a1_nome: "Cliente Mock 3".to_string(),
            },
        ];

        Self {
            inner: Arc::new(RwLock::new(MockData {
                datasets,
                order_children,
                customers,
            })),
        }
    }

    /// Seeded customer lookup rows.
    pub fn customers(&self) -> Vec<CustomerLookupDto> {
        let data = self.inner.read().unwrap_or_else(|err| err.into_inner());
        data.customers.clone()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AliasStore for MockStore {
    async fn fetch_rows(&self, alias: &str) -> Result<Vec<AliasRow>, Error> {
        let data = self.inner.read().unwrap_or_else(|err| err.into_inner());

        Ok(data
            .datasets
            .get(&alias.to_uppercase())
            .cloned()
            .unwrap_or_default())
    }

    async fn insert_row(&self, alias: &str, row: AliasRow) -> Result<AliasRow, Error> {
        let mut data = self.inner.write().unwrap_or_else(|err| err.into_inner());

        data.datasets
            .entry(alias.to_uppercase())
            .or_default()
            .push(row.clone());

        Ok(row)
    }

    async fn update_rows_by_field(
        &self,
        alias: &str,
        field: &str,
        value: &str,
        patch: AliasRow,
    ) -> Result<Vec<AliasRow>, Error> {
        let mut data = self.inner.write().unwrap_or_else(|err| err.into_inner());
        let mut updated = Vec::new();

        if let Some(rows) = data.datasets.get_mut(&alias.to_uppercase()) {
            for row in rows.iter_mut() {
                if value_string(row.get(field)) == value {
                    for (key, val) in &patch {
                        row.insert(key.clone(), val.clone());
                    }
                    updated.push(row.clone());
                }
            }
        }

        Ok(updated)
    }

    async fn delete_rows_by_field(
        &self,
        alias: &str,
        field: &str,
        value: &str,
    ) -> Result<u64, Error> {
        let mut data = self.inner.write().unwrap_or_else(|err| err.into_inner());

        let Some(rows) = data.datasets.get_mut(&alias.to_uppercase()) else {
            return Ok(0);
        };

        let before = rows.len();
        rows.retain(|row| value_string(row.get(field)) != value);

        Ok((before - rows.len()) as u64)
    }

    async fn order_children(
        &self,
        id_ped: &str,
        id_int: &str,
    ) -> Result<OrderChildrenDto, Error> {
        let data = self.inner.read().unwrap_or_else(|err| err.into_inner());
        let key = format!("{id_ped}|{id_int}");

        Ok(data
            .order_children
            .get(&key)
            .map(|children| OrderChildrenDto {
                items: children.items.clone(),
                payments: children.payments.clone(),
                invoices: children.invoices.clone(),
            })
            .unwrap_or_default())
    }
}
