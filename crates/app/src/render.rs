//! Plain-text views of records and reports.
use engine::{
    Expense, Report, calculator, catalog,
    report::{self, pie_slices},
};

const DATE_FORMAT: &str = "%d/%m/%Y";

fn percent(value: f64) -> String {
    format!("{value:.1}%").replace('.', ",")
}

fn period(expense: &Expense) -> String {
    format!(
        "{} a {}",
        expense.start_date.format(DATE_FORMAT),
        expense.end_date.format(DATE_FORMAT)
    )
}

fn location(expense: &Expense) -> String {
    format!("{}/{}", expense.city, expense.state)
}

/// Row per record plus the footer totals.
pub fn table(report: &Report) -> String {
    if report.rows.is_empty() {
        return "Nenhuma despesa encontrada.".to_string();
    }

    let mut lines = vec![format!(
        "{:<38} {:<25} {:<26} {:<14} {:>6} {:>16} {:>16} {:>16}",
        "ID", "Período", "Local", "Instituto", "Reg.", "Valor Fechado", "Despesas", "Lucro"
    )];
    for expense in &report.rows {
        let (total_expense, profit) = report::reported_totals(expense);
        lines.push(format!(
            "{:<38} {:<25} {:<26} {:<14} {:>6} {:>16} {:>16} {:>16}",
            expense.id.as_deref().unwrap_or("-"),
            period(expense),
            location(expense),
            expense.institute,
            expense.registered.as_str(),
            expense.closed_value.to_string(),
            total_expense.to_string(),
            profit.to_string(),
        ));
    }
    lines.push(format!(
        "{} pesquisa(s) | Total de despesas: {} | Lucro total: {}",
        report.totals.count, report.totals.total_expense, report.totals.total_profit
    ));
    lines.join("\n")
}

/// Full view of one record: metadata, costs, margin and tier.
pub fn detail(expense: &Expense) -> String {
    let days = calculator::days_between_dates(expense.start_date, expense.end_date);
    let total = calculator::total_expense(expense);

    let mut lines = vec![
        format!("Despesa {}", expense.id.as_deref().unwrap_or("(nova)")),
        format!("Período: {} ({days} dia(s))", period(expense)),
        format!("Local: {}", location(expense)),
        format!("Instituto: {}", expense.institute),
    ];
    match expense.registration_number.as_deref() {
        Some(number) if expense.registered.is_yes() => {
            lines.push(format!("Registrada: sim ({number})"));
        }
        _ => lines.push(format!("Registrada: {}", expense.registered)),
    }
    if let Some(name) = expense
        .contractor_name
        .as_deref()
        .filter(|_| expense.has_contractor.is_yes())
    {
        lines.push(format!("Contratante: {name}"));
    }
    lines.push(format!("Pesquisadores: {}", expense.researcher_count));
    for name in &expense.researcher_names {
        lines.push(format!("  - {name}"));
    }

    lines.push(format!("Valor fechado: {}", expense.closed_value));
    lines.push("Custos:".to_string());
    for entry in calculator::cost_breakdown(expense) {
        lines.push(format!(
            "  {:<20} {:>16} {:>7}",
            entry.label,
            entry.amount.to_string(),
            percent(report::percentage_of_total(entry.amount, total)),
        ));
    }
    lines.push(format!("Total de despesas: {total}"));
    lines.push(format!("Lucro: {}", calculator::profit(expense)));
    lines.push(format!(
        "Margem: {} ({})",
        percent(report::profit_margin_percentage(expense)),
        report::performance_tier(expense)
    ));
    lines.join("\n")
}

/// Totals and the cost distribution of the report rows.
pub fn summary(report: &Report) -> String {
    let mut lines = vec![
        format!("Pesquisas: {}", report.totals.count),
        format!("Total de despesas: {}", report.totals.total_expense),
        format!("Lucro total: {}", report.totals.total_profit),
    ];
    let slices = pie_slices(&report.breakdown);
    if slices.is_empty() {
        return lines.join("\n");
    }
    lines.push("Distribuição de custos:".to_string());
    for slice in slices {
        lines.push(format!(
            "  {:<20} {:>16} {:>7}  {} {:>5.1}°-{:>5.1}°",
            slice.entry.label,
            slice.entry.amount.to_string(),
            percent(slice.percentage),
            slice.entry.color,
            slice.start_angle,
            slice.end_angle(),
        ));
    }
    lines.join("\n")
}

/// States with their city counts, or the cities of one state.
pub fn catalog_listing(state: Option<&str>) -> String {
    if let Some(state) = state {
        let cities = catalog::cities(state);
        if cities.is_empty() {
            return format!("Estado desconhecido: {state}");
        }
        return cities.join("\n");
    }

    let mut lines = vec!["Estados:".to_string()];
    for state in catalog::states() {
        lines.push(format!("  {state} ({} cidades)", catalog::cities(state).len()));
    }
    lines.push("Institutos:".to_string());
    for institute in catalog::institutes() {
        lines.push(format!("  {institute}"));
    }
    lines.join("\n")
}
