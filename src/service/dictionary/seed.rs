//! Compiled-in default alias schemas.
//!
//! This is the seed source for schema synchronization (`useSeed`) and the
//! degraded-mode schema set served when the configuration tables are not
//! provisioned. Ad-hoc reads against a reachable registry never fall back
//! to these definitions.

use serde_json::Value;

use crate::model::dictionary::{AliasSchema, FieldDescriptor, FieldOption, FieldType};

fn option(value: &str, label: &str) -> FieldOption {
    FieldOption {
        value: Value::String(value.to_string()),
        label: label.to_string(),
    }
}

fn active_options() -> Vec<FieldOption> {
    vec![option("S", "Ativo"), option("N", "Inativo")]
}

#[allow(clippy::too_many_arguments)]
fn field(
    name: &str,
    title: &str,
    field_type: FieldType,
    size: i32,
    required: bool,
    order: i32,
    options: Vec<FieldOption>,
    with_decimals: bool,
    editable: bool,
) -> FieldDescriptor {
    FieldDescriptor {
        field: name.to_string(),
        title: title.to_string(),
        field_type,
        size,
        required,
        editable,
        enabled: true,
        is_virtual: false,
        options,
        decimals: if with_decimals { 2 } else { 0 },
        exist_trigger: false,
        help: String::new(),
        order,
        agrup: None,
        folder: None,
        standard_query: None,
        standard_query_detail: None,
    }
}

fn schema_of(description: &str, fields: Vec<FieldDescriptor>) -> AliasSchema {
    AliasSchema {
        description: description.to_string(),
        fields,
        folders: Vec::new(),
        agrups: Vec::new(),
    }
}

/// The default alias set, in its canonical synchronization order.
pub fn default_schemas() -> Vec<(String, AliasSchema)> {
    use FieldType::{Character as C, Date as D, Memo as M, Numeric as N};

    vec![
        (
            "Z10".to_string(),
            schema_of(
                "Plataformas",
                vec![
                    field("Z10_COD", "Codigo", C, 15, true, 1, vec![], false, true),
                    field("Z10_DESC", "Descricao", C, 60, true, 2, vec![], false, true),
                    field("Z10_ATIVO", "Ativo", C, 1, true, 3, active_options(), false, true),
                    field("Z10_DTALT", "Ultima Atualizacao", D, 8, false, 4, vec![], false, false),
                ],
            ),
        ),
        (
            "Z11".to_string(),
            schema_of(
                "Programas de Envio",
                vec![
                    field("Z11_COD", "Codigo", C, 15, true, 1, vec![], false, true),
                    field("Z11_DESC", "Descricao", C, 60, true, 2, vec![], false, true),
                    field("Z11_PRAZO", "Prazo em Dias", N, 3, true, 3, vec![], false, true),
                    field("Z11_ATIVO", "Ativo", C, 1, true, 4, active_options(), false, true),
                ],
            ),
        ),
        (
            "Z00".to_string(),
            schema_of(
                "Contas de Marketplaces",
                vec![
                    field("Z00_COD", "Codigo", C, 15, true, 1, vec![], false, true),
                    field("Z00_DESC", "Descricao", C, 60, true, 2, vec![], false, true),
                    field("Z00_TOKEN", "Token", C, 120, true, 3, vec![], false, true),
                    field(
                        "Z00_STATUS",
                        "Status",
                        C,
                        1,
                        true,
                        4,
                        vec![option("A", "Ativo"), option("I", "Inativo")],
                        false,
                        true,
                    ),
                ],
            ),
        ),
        (
            "Z01".to_string(),
            schema_of(
                "Produto x Conta",
                vec![
                    field("Z01_COD", "Codigo", C, 6, false, 1, vec![], false, false),
                    field("Z01_PRDERP", "Produto ERP", C, 20, true, 2, vec![], false, true),
                    field("Z01_DESCER", "Descricao ERP", C, 60, true, 3, vec![], false, true),
                    field("Z01_CONTA", "Conta Marketplace", C, 15, true, 4, vec![], false, true),
                    field("Z01_SKU", "SKU Marketplace", C, 30, true, 5, vec![], false, true),
                    field("Z01_ATIVO", "Ativo", C, 1, true, 6, active_options(), false, true),
                ],
            ),
        ),
        (
            "Z02".to_string(),
            schema_of(
                "Pedidos Integrados",
                vec![
                    field("Z02_COD", "Codigo", C, 15, true, 1, vec![], false, false),
                    field("Z02_IDPED", "Id Pedido", C, 25, true, 2, vec![], false, true),
                    field("Z02_IDINT", "Id Integracao", C, 25, true, 3, vec![], false, true),
                    field("Z02_PEDIDO", "Pedido ERP", C, 20, false, 4, vec![], false, false),
                    field("Z02_CLIENT", "Cliente", C, 10, false, 5, vec![], false, true),
                    field("Z02_LOJA", "Loja", C, 4, false, 6, vec![], false, true),
                    field(
                        "Z02_STATUS",
                        "Status",
                        C,
                        10,
                        true,
                        7,
                        vec![
                            option("NOVO", "Novo"),
                            option("PROC", "Processando"),
                            option("OK", "Concluido"),
                            option("ERRO", "Erro"),
                        ],
                        false,
                        true,
                    ),
                    field("Z02_ULTATT", "Ultima Atualizacao", D, 8, false, 8, vec![], false, false),
                ],
            ),
        ),
        (
            "Z03".to_string(),
            schema_of(
                "Itens Integrados",
                vec![
                    field("Z03_ITEM", "Item", C, 4, true, 1, vec![], false, true),
                    field("Z03_PROD", "Produto", C, 20, true, 2, vec![], false, true),
                    field("Z03_DESC", "Descricao", C, 60, false, 3, vec![], false, true),
                    field("Z03_QTD", "Quantidade", N, 10, true, 4, vec![], false, true),
                    field("Z03_VLR", "Valor", N, 15, true, 5, vec![], true, true),
                ],
            ),
        ),
        (
            "Z04".to_string(),
            schema_of(
                "Log de Integracao",
                vec![
                    field("Z04_COD", "Codigo", C, 12, true, 1, vec![], false, false),
                    field("Z04_DTHORA", "Data Hora", D, 8, true, 2, vec![], false, false),
                    field("Z04_TIPO", "Tipo", C, 10, true, 3, vec![], false, true),
                    field(
                        "Z04_STATUS",
                        "Status",
                        C,
                        10,
                        true,
                        4,
                        vec![option("OK", "Sucesso"), option("FALHA", "Falha")],
                        false,
                        true,
                    ),
                    field("Z04_MSG", "Mensagem", M, 200, false, 5, vec![], false, false),
                ],
            ),
        ),
        (
            "Z05".to_string(),
            schema_of(
                "Pagamentos",
                vec![
                    field("Z05_FORMA", "Forma", C, 20, true, 1, vec![], false, true),
                    field("Z05_VALOR", "Valor", N, 15, true, 2, vec![], true, true),
                    field("Z05_STATUS", "Status", C, 12, true, 3, vec![], false, true),
                    field("Z05_IDPED", "Id Pedido", C, 25, false, 4, vec![], false, false),
                    field("Z05_IDINT", "Id Integracao", C, 25, false, 5, vec![], false, false),
                ],
            ),
        ),
        (
            "Z06".to_string(),
            schema_of(
                "Faturamentos",
                vec![
                    field("Z06_DOC", "Documento", C, 20, true, 1, vec![], false, true),
                    field("Z06_SERIE", "Serie", C, 6, true, 2, vec![], false, true),
                    field("Z06_VALOR", "Valor", N, 15, true, 3, vec![], true, true),
                    field("Z06_STATUS", "Status", C, 12, true, 4, vec![], false, true),
                    field("Z06_IDPED", "Id Pedido", C, 25, false, 5, vec![], false, false),
                    field("Z06_IDINT", "Id Integracao", C, 25, false, 6, vec![], false, false),
                ],
            ),
        ),
    ]
}

/// Looks up one alias in the default set.
pub fn schema(alias: &str) -> Option<AliasSchema> {
    let alias = alias.to_uppercase();
    default_schemas()
        .into_iter()
        .find(|(code, _)| *code == alias)
        .map(|(_, schema)| schema)
}
