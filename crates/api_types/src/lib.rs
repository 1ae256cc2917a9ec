use serde::{Deserialize, Deserializer, Serialize};

/// Error body returned by the storage backend.
///
/// PostgREST answers with `message`, other gateways with `error`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_text(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|text| !text.trim().is_empty())
    }
}

pub mod expense {
    use chrono::{DateTime, NaiveDate, Utc};

    use super::*;

    /// Storage column names, as used in query strings.
    pub mod columns {
        pub const ID: &str = "id";
        pub const STATE: &str = "estado";
        pub const CITY: &str = "cidade";
        pub const INSTITUTE: &str = "instituto_pesquisa";
        pub const REGISTERED: &str = "esta_registrado";
        pub const CREATED_AT: &str = "criado_em";
    }

    /// A row of the `despesas` table.
    ///
    /// Amounts are reais as decimal numbers. Numeric columns the backend
    /// leaves `null` read as zero.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseRow {
        pub id: String,
        pub data_inicio: NaiveDate,
        pub data_termino: NaiveDate,
        pub estado: String,
        pub cidade: String,
        pub instituto_pesquisa: String,
        pub esta_registrado: String,
        #[serde(default)]
        pub numero_registro: Option<String>,
        pub tem_contratante: String,
        #[serde(default)]
        pub nome_contratante: Option<String>,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub numero_pesquisadores: u32,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub nomes_pesquisadores: Vec<String>,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub valor_fechado: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub quantidade_questionario: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub valor_questionario: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub quantidade_diaria_carro: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub valor_diaria_carro: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub quantidade_diaria_alimentacao: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub valor_diaria_alimentacao: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub hospedagem: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub gasolina: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub custo_sistema: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub moto_taxi: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub custo_estatistico: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub outros_custos: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub total_despesas: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        pub lucro: f64,
        #[serde(default)]
        pub criado_em: Option<DateTime<Utc>>,
        #[serde(default)]
        pub atualizado_em: Option<DateTime<Utc>>,
    }

    /// Body of an insert. The backend assigns `id` and the timestamps.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseInsert {
        pub data_inicio: NaiveDate,
        pub data_termino: NaiveDate,
        pub estado: String,
        pub cidade: String,
        pub instituto_pesquisa: String,
        pub esta_registrado: String,
        pub numero_registro: Option<String>,
        pub tem_contratante: String,
        pub nome_contratante: Option<String>,
        pub numero_pesquisadores: u32,
        pub nomes_pesquisadores: Vec<String>,
        pub valor_fechado: f64,
        pub quantidade_questionario: f64,
        pub valor_questionario: f64,
        pub quantidade_diaria_carro: f64,
        pub valor_diaria_carro: f64,
        pub quantidade_diaria_alimentacao: f64,
        pub valor_diaria_alimentacao: f64,
        pub hospedagem: f64,
        pub gasolina: f64,
        pub custo_sistema: f64,
        pub moto_taxi: f64,
        pub custo_estatistico: f64,
        pub outros_custos: f64,
        pub total_despesas: f64,
        pub lucro: f64,
    }

    /// Body of a partial update: absent fields are not sent.
    ///
    /// `numero_registro` and `nome_contratante` use a nested option so a
    /// value can be cleared with an explicit `null`.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub data_inicio: Option<NaiveDate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub data_termino: Option<NaiveDate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub estado: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub cidade: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub instituto_pesquisa: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub esta_registrado: Option<String>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "present"
        )]
        pub numero_registro: Option<Option<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub tem_contratante: Option<String>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "present"
        )]
        pub nome_contratante: Option<Option<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub numero_pesquisadores: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub nomes_pesquisadores: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub valor_fechado: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub quantidade_questionario: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub valor_questionario: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub quantidade_diaria_carro: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub valor_diaria_carro: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub quantidade_diaria_alimentacao: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub valor_diaria_alimentacao: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub hospedagem: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub gasolina: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub custo_sistema: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub moto_taxi: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub custo_estatistico: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub outros_custos: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub total_despesas: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub lucro: Option<f64>,
    }

    impl ExpenseUpdate {
        /// Returns `true` when the update would not send any column.
        pub fn is_empty(&self) -> bool {
            *self == Self::default()
        }
    }

    /// Reads a nullable column, treating `null` as the type's default.
    fn zero_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Distinguishes an explicit `null` (`Some(None)`) from a missing field.
    fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Some(Option::<T>::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::expense::*;
    use super::*;

    #[test]
    fn row_tolerates_null_numbers() {
        let json = r#"{
            "id": "7f1c",
            "data_inicio": "2024-01-15",
            "data_termino": "2024-01-20",
            "estado": "PI",
            "cidade": "Teresina",
            "instituto_pesquisa": "Piauí Vox",
            "esta_registrado": "sim",
            "numero_registro": "BR-00001/2024",
            "tem_contratante": "nao",
            "nome_contratante": null,
            "numero_pesquisadores": 2,
            "nomes_pesquisadores": null,
            "valor_fechado": 5000,
            "gasolina": 200.5,
            "hospedagem": null,
            "criado_em": "2024-01-15T10:00:00.123456+00:00"
        }"#;
        let row: ExpenseRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.valor_fechado, 5000.0);
        assert_eq!(row.gasolina, 200.5);
        assert_eq!(row.hospedagem, 0.0);
        assert!(row.nomes_pesquisadores.is_empty());
        assert_eq!(row.nome_contratante, None);
        assert!(row.criado_em.is_some());
        assert_eq!(row.atualizado_em, None);
    }

    #[test]
    fn update_sends_only_present_columns() {
        let update = ExpenseUpdate {
            cidade: Some("Parnaíba".to_string()),
            nome_contratante: Some(None),
            gasolina: Some(120.0),
            ..ExpenseUpdate::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "cidade": "Parnaíba",
                "nome_contratante": null,
                "gasolina": 120.0
            })
        );
        assert!(!update.is_empty());
        assert!(ExpenseUpdate::default().is_empty());
    }

    #[test]
    fn update_keeps_explicit_null_apart_from_missing() {
        let update: ExpenseUpdate =
            serde_json::from_str(r#"{"numero_registro": null}"#).unwrap();
        assert_eq!(update.numero_registro, Some(None));
        assert_eq!(update.nome_contratante, None);
    }

    #[test]
    fn error_body_prefers_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "duplicate key", "error": "x"}"#).unwrap();
        assert_eq!(body.into_text().as_deref(), Some("duplicate key"));

        let body: ErrorBody = serde_json::from_str(r#"{"error": "not allowed"}"#).unwrap();
        assert_eq!(body.into_text().as_deref(), Some("not allowed"));

        let body: ErrorBody = serde_json::from_str(r#"{"message": " "}"#).unwrap();
        assert_eq!(body.into_text(), None);
    }
}
