//! Translation between [`Expense`] and the storage row shapes.
//!
//! Every record field has exactly one column. Amounts are stored as reais,
//! the record keeps centavos.
use api_types::expense::{ExpenseInsert, ExpenseRow, ExpenseUpdate};
use engine::{Costs, Expense, ExpensePatch, Money, RateLine, YesNo, calculator};

/// Insert body for `expense`. Totals are computed here, the backend may
/// recompute them.
pub fn to_insert(expense: &Expense) -> ExpenseInsert {
    let costs = &expense.costs;
    ExpenseInsert {
        data_inicio: expense.start_date,
        data_termino: expense.end_date,
        estado: expense.state.clone(),
        cidade: expense.city.clone(),
        instituto_pesquisa: expense.institute.clone(),
        esta_registrado: expense.registered.as_str().to_string(),
        numero_registro: expense.registration_number.clone(),
        tem_contratante: expense.has_contractor.as_str().to_string(),
        nome_contratante: expense.contractor_name.clone(),
        numero_pesquisadores: expense.researcher_count,
        nomes_pesquisadores: expense.researcher_names.clone(),
        valor_fechado: expense.closed_value.to_major(),
        quantidade_questionario: costs.questionnaire.quantity,
        valor_questionario: costs.questionnaire.unit_price.to_major(),
        quantidade_diaria_carro: costs.car_diem.quantity,
        valor_diaria_carro: costs.car_diem.unit_price.to_major(),
        quantidade_diaria_alimentacao: costs.meal_diem.quantity,
        valor_diaria_alimentacao: costs.meal_diem.unit_price.to_major(),
        hospedagem: costs.lodging.to_major(),
        gasolina: costs.fuel.to_major(),
        custo_sistema: costs.system.to_major(),
        moto_taxi: costs.moto_taxi.to_major(),
        custo_estatistico: costs.statistician.to_major(),
        outros_custos: costs.other.to_major(),
        total_despesas: calculator::total_expense(expense).to_major(),
        lucro: calculator::profit(expense).to_major(),
    }
}

/// Update body carrying only the fields present in `patch`.
///
/// An empty registration number or contractor name is sent as `null`.
pub fn to_patch(patch: &ExpensePatch) -> ExpenseUpdate {
    let major = |amount: Option<Money>| amount.map(Money::to_major);
    ExpenseUpdate {
        data_inicio: patch.start_date,
        data_termino: patch.end_date,
        estado: patch.state.clone(),
        cidade: patch.city.clone(),
        instituto_pesquisa: patch.institute.clone(),
        esta_registrado: patch.registered.map(|v| v.as_str().to_string()),
        numero_registro: patch.registration_number.as_deref().map(nullable),
        tem_contratante: patch.has_contractor.map(|v| v.as_str().to_string()),
        nome_contratante: patch.contractor_name.as_deref().map(nullable),
        numero_pesquisadores: patch.researcher_count,
        nomes_pesquisadores: patch.researcher_names.clone(),
        valor_fechado: major(patch.closed_value),
        quantidade_questionario: patch.questionnaire.map(|l| l.quantity),
        valor_questionario: patch.questionnaire.map(|l| l.unit_price.to_major()),
        quantidade_diaria_carro: patch.car_diem.map(|l| l.quantity),
        valor_diaria_carro: patch.car_diem.map(|l| l.unit_price.to_major()),
        quantidade_diaria_alimentacao: patch.meal_diem.map(|l| l.quantity),
        valor_diaria_alimentacao: patch.meal_diem.map(|l| l.unit_price.to_major()),
        hospedagem: major(patch.lodging),
        gasolina: major(patch.fuel),
        custo_sistema: major(patch.system),
        moto_taxi: major(patch.moto_taxi),
        custo_estatistico: major(patch.statistician),
        outros_custos: major(patch.other),
        total_despesas: major(patch.total_expense),
        lucro: major(patch.profit),
    }
}

/// Rebuilds a record from a stored row. Stored totals are kept as-is.
///
/// Unrecognized yes/no values read as "nao".
pub fn from_row(row: ExpenseRow) -> Expense {
    Expense {
        id: Some(row.id),
        start_date: row.data_inicio,
        end_date: row.data_termino,
        registered: yes_no("esta_registrado", &row.esta_registrado),
        has_contractor: yes_no("tem_contratante", &row.tem_contratante),
        state: row.estado,
        city: row.cidade,
        institute: row.instituto_pesquisa,
        registration_number: row.numero_registro,
        contractor_name: row.nome_contratante,
        researcher_count: row.numero_pesquisadores,
        researcher_names: row.nomes_pesquisadores,
        closed_value: Money::from_major(row.valor_fechado),
        costs: Costs {
            questionnaire: RateLine::new(
                row.quantidade_questionario,
                Money::from_major(row.valor_questionario),
            ),
            car_diem: RateLine::new(
                row.quantidade_diaria_carro,
                Money::from_major(row.valor_diaria_carro),
            ),
            meal_diem: RateLine::new(
                row.quantidade_diaria_alimentacao,
                Money::from_major(row.valor_diaria_alimentacao),
            ),
            lodging: Money::from_major(row.hospedagem),
            fuel: Money::from_major(row.gasolina),
            system: Money::from_major(row.custo_sistema),
            moto_taxi: Money::from_major(row.moto_taxi),
            statistician: Money::from_major(row.custo_estatistico),
            other: Money::from_major(row.outros_custos),
        },
        total_expense: Money::from_major(row.total_despesas),
        profit: Money::from_major(row.lucro),
        created_at: row.criado_em,
        updated_at: row.atualizado_em,
    }
}

/// Row the backend would store for `insert`, with the given id and no
/// timestamps.
pub(crate) fn row_from_insert(id: String, insert: ExpenseInsert) -> ExpenseRow {
    ExpenseRow {
        id,
        data_inicio: insert.data_inicio,
        data_termino: insert.data_termino,
        estado: insert.estado,
        cidade: insert.cidade,
        instituto_pesquisa: insert.instituto_pesquisa,
        esta_registrado: insert.esta_registrado,
        numero_registro: insert.numero_registro,
        tem_contratante: insert.tem_contratante,
        nome_contratante: insert.nome_contratante,
        numero_pesquisadores: insert.numero_pesquisadores,
        nomes_pesquisadores: insert.nomes_pesquisadores,
        valor_fechado: insert.valor_fechado,
        quantidade_questionario: insert.quantidade_questionario,
        valor_questionario: insert.valor_questionario,
        quantidade_diaria_carro: insert.quantidade_diaria_carro,
        valor_diaria_carro: insert.valor_diaria_carro,
        quantidade_diaria_alimentacao: insert.quantidade_diaria_alimentacao,
        valor_diaria_alimentacao: insert.valor_diaria_alimentacao,
        hospedagem: insert.hospedagem,
        gasolina: insert.gasolina,
        custo_sistema: insert.custo_sistema,
        moto_taxi: insert.moto_taxi,
        custo_estatistico: insert.custo_estatistico,
        outros_custos: insert.outros_custos,
        total_despesas: insert.total_despesas,
        lucro: insert.lucro,
        criado_em: None,
        atualizado_em: None,
    }
}

fn nullable(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn yes_no(column: &str, value: &str) -> YesNo {
    YesNo::try_from(value).unwrap_or_else(|_| {
        tracing::warn!(column, value, "unrecognized yes/no value, reading as \"nao\"");
        YesNo::No
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record() -> Expense {
        let mut expense = Expense {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            state: "PI".to_string(),
            city: "Teresina".to_string(),
            institute: "Piauí Vox".to_string(),
            registered: YesNo::Yes,
            registration_number: Some("BR-00001/2024".to_string()),
            has_contractor: YesNo::No,
            researcher_count: 2,
            researcher_names: vec!["João Silva".to_string(), "Maria Santos".to_string()],
            closed_value: Money::new(500_000),
            costs: Costs {
                questionnaire: RateLine::new(1.5, Money::new(1_000)),
                car_diem: RateLine::new(2.0, Money::new(15_000)),
                meal_diem: RateLine::new(3.0, Money::new(8_000)),
                lodging: Money::new(30_000),
                fuel: Money::new(20_000),
                system: Money::new(10_000),
                moto_taxi: Money::new(5_000),
                statistician: Money::new(40_000),
                other: Money::new(7_500),
            },
            ..Expense::default()
        };
        expense.refresh_totals();
        expense
    }

    #[test]
    fn insert_carries_reais_and_local_totals() {
        let insert = to_insert(&record());
        assert_eq!(insert.valor_fechado, 5000.0);
        assert_eq!(insert.valor_questionario, 10.0);
        assert_eq!(insert.total_despesas, 1585.0);
        assert_eq!(insert.lucro, 3415.0);
        assert_eq!(insert.esta_registrado, "sim");
        assert_eq!(insert.tem_contratante, "nao");
    }

    #[test]
    fn row_round_trip_keeps_every_field() {
        let original = record();
        let restored = from_row(row_from_insert("abc".to_string(), to_insert(&original)));
        assert_eq!(restored.id.as_deref(), Some("abc"));

        let restored = Expense {
            id: None,
            ..restored
        };
        assert_eq!(restored, original);
    }

    #[test]
    fn patch_clears_blank_optional_text() {
        let patch = ExpensePatch {
            contractor_name: Some(String::new()),
            registration_number: Some("BR-2".to_string()),
            fuel: Some(Money::new(12_050)),
            ..ExpensePatch::default()
        };
        let update = to_patch(&patch);
        assert_eq!(update.nome_contratante, Some(None));
        assert_eq!(update.numero_registro, Some(Some("BR-2".to_string())));
        assert_eq!(update.gasolina, Some(120.5));
        assert_eq!(update.estado, None);
        assert!(to_patch(&ExpensePatch::default()).is_empty());
    }

    #[test]
    fn unknown_yes_no_reads_as_no() {
        let mut row = row_from_insert("x".to_string(), to_insert(&record()));
        row.esta_registrado = "talvez".to_string();
        assert_eq!(from_row(row).registered, YesNo::No);
    }
}
