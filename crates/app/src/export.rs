//! CSV export of expense records.
use std::io::Write;

use csv::WriterBuilder;
use engine::{Expense, report};
use serde::Serialize;

use crate::error::Result;

const HEADERS: [&str; 16] = [
    "id",
    "data_inicio",
    "data_termino",
    "estado",
    "cidade",
    "instituto_pesquisa",
    "esta_registrado",
    "numero_registro",
    "tem_contratante",
    "nome_contratante",
    "numero_pesquisadores",
    "nomes_pesquisadores",
    "valor_fechado",
    "total_despesas",
    "lucro",
    "margem_percentual",
];

/// One CSV line; field order must match [`HEADERS`].
#[derive(Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    data_inicio: String,
    data_termino: String,
    estado: &'a str,
    cidade: &'a str,
    instituto_pesquisa: &'a str,
    esta_registrado: &'a str,
    numero_registro: &'a str,
    tem_contratante: &'a str,
    nome_contratante: &'a str,
    numero_pesquisadores: u32,
    nomes_pesquisadores: String,
    valor_fechado: f64,
    total_despesas: f64,
    lucro: f64,
    margem_percentual: f64,
}

impl<'a> From<&'a Expense> for ExportRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_deref().unwrap_or_default(),
            data_inicio: expense.start_date.to_string(),
            data_termino: expense.end_date.to_string(),
            estado: &expense.state,
            cidade: &expense.city,
            instituto_pesquisa: &expense.institute,
            esta_registrado: expense.registered.as_str(),
            numero_registro: expense.registration_number.as_deref().unwrap_or_default(),
            tem_contratante: expense.has_contractor.as_str(),
            nome_contratante: expense.contractor_name.as_deref().unwrap_or_default(),
            numero_pesquisadores: expense.researcher_count,
            nomes_pesquisadores: expense.researcher_names.join("; "),
            valor_fechado: expense.closed_value.to_major(),
            total_despesas: expense.total_expense.to_major(),
            lucro: expense.profit.to_major(),
            margem_percentual: report::profit_margin_percentage(expense),
        }
    }
}

/// Writes the header and one CSV row per record. Returns the row count.
pub fn write_csv<W: Write>(out: W, expenses: &[Expense]) -> Result<usize> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(HEADERS)?;
    for expense in expenses {
        writer.serialize(ExportRow::from(expense))?;
    }
    writer.flush()?;
    Ok(expenses.len())
}
