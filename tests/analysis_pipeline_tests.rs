use ceaiscore::{
    analyze, parse_survey, DataQualityIssue, Dimension, ReliabilityEstimate, SurveyError,
    QUESTION_COUNT,
};
use pretty_assertions::assert_eq;

fn header() -> String {
    (1..=QUESTION_COUNT)
        .map(|i| format!("Q{i}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn row(phrase: &str) -> String {
    vec![phrase; QUESTION_COUNT].join(",")
}

#[test]
fn unanimous_strong_agreement_is_strong_but_unreliable() {
    let input = format!(
        "{}\n{}\n{}\n",
        header(),
        row("Strongly Agree"),
        row("Strongly Agree")
    );
    let table = parse_survey(&input).unwrap();
    let report = analyze(&table).unwrap();

    for dim in Dimension::ALL {
        assert_eq!(report.statistics.means[dim], 5.0, "{dim}");
        assert_eq!(report.statistics.medians[dim], 5.0, "{dim}");
        assert_eq!(report.statistics.std_devs[dim], 0.0, "{dim}");
        // zero total-score variance: insufficient data, never 0 or 1
        assert_eq!(report.reliability[dim].alpha(), None, "{dim}");
    }
    assert_eq!(report.statistics.strong_dimensions, Dimension::ALL.to_vec());
    assert!(report.statistics.weak_dimensions.is_empty());
    assert!(report.diagnostics.is_empty());
    assert!(report.department_breakdown.is_empty());
}

#[test]
fn invalid_cell_in_single_row_surfaces_as_data_quality_issue() {
    let mut cells = vec!["Agree"; QUESTION_COUNT];
    cells[0] = "maybe";
    let input = format!("{}\n{}\n", header(), cells.join(","));
    let table = parse_survey(&input).unwrap();
    let report = analyze(&table).unwrap();

    // the only row has no valid value in column 0, so its mean is undefined
    assert_eq!(
        report.diagnostics,
        vec![DataQualityIssue::EmptyColumn {
            column: 0,
            dimension: Dimension::ManagementSupport
        }]
    );
    assert!(report.cleaned_data[0][0].is_nan());
    // the dimension score falls back to the remaining 7 valid items
    assert_eq!(
        report.dimension_scores[0][Dimension::ManagementSupport],
        4.0
    );
    assert!(matches!(
        report.reliability[Dimension::ManagementSupport],
        ReliabilityEstimate::InsufficientData { .. }
    ));
}

#[test]
fn invalid_cell_is_imputed_from_other_rows() {
    let mut first = vec!["Strongly Disagree"; QUESTION_COUNT];
    first[0] = "maybe";
    let input = format!(
        "{}\n{}\n{}\n{}\n",
        header(),
        first.join(","),
        row("Disagree"),
        row("Agree")
    );
    let table = parse_survey(&input).unwrap();
    let report = analyze(&table).unwrap();

    // column 0 mean over the valid rows: (2 + 4) / 2 = 3
    assert_eq!(report.cleaned_data[0][0], 3.0);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn per_dimension_alpha_matches_hand_computation() {
    // Management Support items carry each respondent's attitude verbatim,
    // everything else is fixed; perfectly correlated items give alpha 1
    let attitudes = ["Strongly Disagree", "Not Sure", "Strongly Agree"];
    let ms_items = Dimension::ManagementSupport.items();
    let mut lines = vec![header()];
    for attitude in attitudes {
        let cells: Vec<&str> = (0..QUESTION_COUNT)
            .map(|i| if ms_items.contains(&i) { attitude } else { "Agree" })
            .collect();
        lines.push(cells.join(","));
    }
    let table = parse_survey(&lines.join("\n")).unwrap();
    let report = analyze(&table).unwrap();

    assert_eq!(
        report.reliability[Dimension::ManagementSupport],
        ReliabilityEstimate::Alpha(1.0)
    );
    assert_eq!(report.statistics.means[Dimension::ManagementSupport], 3.0);
    assert_eq!(report.statistics.std_devs[Dimension::ManagementSupport], 1.63);
    // every other dimension sits exactly on the strong threshold: strict
    // inequality keeps it unclassified
    assert_eq!(report.statistics.means[Dimension::Rewards], 4.0);
    assert!(report.statistics.strong_dimensions.is_empty());
}

#[test]
fn department_column_groups_respondents() {
    let input = format!(
        "Timestamp,{},Department\n2025-01-01,{},Sales\n2025-01-02,{},Sales\n2025-01-03,{},\n",
        header(),
        row("Strongly Agree"),
        row("Not Sure"),
        row("Agree")
    );
    let table = parse_survey(&input).unwrap();
    let report = analyze(&table).unwrap();

    assert_eq!(report.department_breakdown.len(), 2);
    let sales = &report.department_breakdown["Sales"];
    assert_eq!(sales[Dimension::TimeAvailability], 4.0); // mean of 5 and 3
    let unknown = &report.department_breakdown["Unknown"];
    assert_eq!(unknown[Dimension::TimeAvailability], 4.0);
}

#[test]
fn header_only_input_is_a_structural_error() {
    assert_eq!(parse_survey(&header()), Err(SurveyError::TooFewRows));
    assert_eq!(parse_survey(""), Err(SurveyError::TooFewRows));
}

#[test]
fn wrong_column_count_is_a_structural_error() {
    let input = "Q1,Q2,Q3\nAgree,Agree,Agree\n";
    assert_eq!(
        parse_survey(input),
        Err(SurveyError::QuestionColumnMismatch {
            expected: QUESTION_COUNT,
            found: 3
        })
    );
}

#[test]
fn row_order_does_not_change_the_result() {
    let mut first = vec!["Agree"; QUESTION_COUNT];
    first[5] = "invalid";
    let mut second = vec!["Disagree"; QUESTION_COUNT];
    second[10] = "";
    let third = vec!["Strongly Agree"; QUESTION_COUNT];

    let forward = format!(
        "{}\n{}\n{}\n{}\n",
        header(),
        first.join(","),
        second.join(","),
        third.join(",")
    );
    let backward = format!(
        "{}\n{}\n{}\n{}\n",
        header(),
        third.join(","),
        second.join(","),
        first.join(",")
    );

    let a = analyze(&parse_survey(&forward).unwrap()).unwrap();
    let b = analyze(&parse_survey(&backward).unwrap()).unwrap();

    assert_eq!(a.statistics, b.statistics);
    assert_eq!(a.reliability, b.reliability);
    assert_eq!(a.cleaned_data[0], b.cleaned_data[2]);
    assert_eq!(a.cleaned_data[2], b.cleaned_data[0]);
}

#[test]
fn report_serializes_with_stable_keys() {
    let input = format!(
        "{}\n{}\n{}\n",
        header(),
        row("Agree"),
        row("Not Sure")
    );
    let report = analyze(&parse_survey(&input).unwrap()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let means = &json["statistics"]["means"];
    for dim in Dimension::ALL {
        assert!(means[dim.name()].is_number(), "{}", dim.name());
    }
    assert!(json["reliability"]["Management Support"]["insufficient_data"]["reason"].is_string()
        || json["reliability"]["Management Support"]["alpha"].is_number());
}
