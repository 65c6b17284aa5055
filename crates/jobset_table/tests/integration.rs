//! Integration tests for the job set table as its owner sees it.
//!
//! Test categories:
//! - Row contract: rendered rows, checkbox projection
//! - Header contract: checked/disabled rules and click routing
//! - State-cell routing: pointer clicks on count columns
//! - Sort header: direction display and change requests

#![forbid(unsafe_code)]

use jobset_table::{
    ColumnKey, ColumnWeights, Hit, Intent, JobSet, JobSetTable, JobSetTableProps, JobState,
    PointerEvent, ScrollWindow, SelectedJobSets, Styles, CHECKBOX_WIDTH,
};

fn sample() -> Vec<JobSet> {
    vec![
        JobSet::new("a", "2026-10-16T09:00:00Z")
            .with_queued(0)
            .with_pending(0)
            .with_running(1)
            .with_succeeded(10)
            .with_failed(2),
        JobSet::new("b", "2026-10-16T08:00:00Z").with_queued(4),
        JobSet::new("c", "2026-10-16T07:00:00Z"),
        JobSet::new("d", "2026-10-16T06:00:00Z").with_pending(7),
    ]
}

fn props<'a>(
    job_sets: &'a [JobSet],
    selected: &'a SelectedJobSets,
    weights: &'a ColumnWeights,
) -> JobSetTableProps<'a> {
    JobSetTableProps {
        width: 104,
        height: 20,
        job_sets,
        selected,
        newest_first: true,
        column_weights: weights,
    }
}

/// X coordinate inside the given column for the default weights at width 104.
fn x_of(table: &JobSetTable<'_>, column: ColumnKey) -> u16 {
    let start = CHECKBOX_WIDTH + table.layout().start(column);
    u16::try_from(start + 1).expect("small coordinate")
}

// ============================================================================
// Row Contract
// ============================================================================

mod row_contract {
    use super::*;

    #[test]
    fn rendered_rows_match_job_set_count() {
        let sets = sample();
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table =
            JobSetTable::new(props(&sets, &selected, &weights)).with_styles(Styles::plain());

        let lines = table.lines(&ScrollWindow::new());
        assert_eq!(lines.len(), 1 + sets.len());
        for (line, js) in lines[1..].iter().zip(&sets) {
            assert!(line.contains(&js.job_set_id));
        }
    }

    #[test]
    fn empty_list_renders_header_only() {
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&[], &selected, &weights)).with_styles(Styles::plain());
        assert_eq!(table.lines(&ScrollWindow::new()).len(), 1);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn row_checkbox_click_at_index_three() {
        let sets = sample();
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&sets, &selected, &weights));
        let mut intents: Vec<Intent> = Vec::new();

        assert!(table.handle_pointer(
            &PointerEvent::click(1, 4),
            &ScrollWindow::new(),
            &mut intents
        ));
        assert_eq!(
            intents,
            vec![Intent::SelectJobSet {
                index: 3,
                selected: true
            }]
        );
    }

    #[test]
    fn shift_click_forwards_range_intent() {
        let sets = sample();
        let selected: SelectedJobSets = [sets[2].clone()].into_iter().collect();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&sets, &selected, &weights));
        let mut intents: Vec<Intent> = Vec::new();

        table.handle_pointer(
            &PointerEvent::shift_click(0, 3),
            &ScrollWindow::new(),
            &mut intents,
        );
        assert_eq!(
            intents,
            vec![Intent::ShiftSelectJobSet {
                index: 2,
                selected: false
            }]
        );
    }
}

// ============================================================================
// Header Contract
// ============================================================================

mod header_contract {
    use super::*;

    #[test]
    fn empty_selection_and_empty_list() {
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&[], &selected, &weights));
        let header = table.header();
        assert!(!header.is_checked());
        assert!(header.is_disabled());

        let mut intents: Vec<Intent> = Vec::new();
        assert!(!table.handle_pointer(
            &PointerEvent::click(1, 0),
            &ScrollWindow::new(),
            &mut intents
        ));
        assert!(intents.is_empty());
    }

    #[test]
    fn full_selection_clears_on_click() {
        let sets = sample();
        let selected: SelectedJobSets = sets.iter().cloned().collect();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&sets, &selected, &weights));
        assert!(table.header().is_checked());

        let mut intents: Vec<Intent> = Vec::new();
        table.handle_pointer(&PointerEvent::click(0, 0), &ScrollWindow::new(), &mut intents);
        assert_eq!(intents, vec![Intent::DeselectAll]);
    }

    #[test]
    fn no_selection_selects_all_on_click() {
        let sets = sample();
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&sets, &selected, &weights));
        assert!(!table.header().is_checked());
        assert!(!table.header().is_disabled());

        let mut intents: Vec<Intent> = Vec::new();
        table.handle_pointer(&PointerEvent::click(2, 0), &ScrollWindow::new(), &mut intents);
        assert_eq!(intents, vec![Intent::SelectAll]);
    }
}

// ============================================================================
// State-Cell Routing
// ============================================================================

mod state_cell_routing {
    use super::*;

    #[test]
    fn failed_cell_opens_job_set() {
        let sets = sample();
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&sets, &selected, &weights));
        let window = ScrollWindow::new();
        let mut intents: Vec<Intent> = Vec::new();

        let x = x_of(&table, ColumnKey::JobsFailed);
        assert_eq!(
            table.hit_test(x, 1, &window),
            Some(Hit::Cell {
                index: 0,
                column: ColumnKey::JobsFailed
            })
        );
        assert!(table.handle_pointer(&PointerEvent::click(x, 1), &window, &mut intents));
        assert_eq!(
            intents,
            vec![Intent::OpenJobSet {
                job_set_id: "a".into(),
                state: JobState::Failed
            }]
        );
    }

    #[test]
    fn zero_queued_cell_is_inert() {
        let sets = sample();
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&sets, &selected, &weights));
        let mut intents: Vec<Intent> = Vec::new();

        let x = x_of(&table, ColumnKey::JobsQueued);
        assert!(!table.handle_pointer(
            &PointerEvent::click(x, 1),
            &ScrollWindow::new(),
            &mut intents
        ));
        assert!(intents.is_empty());
    }

    #[test]
    fn absent_count_is_inert() {
        let sets = sample();
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&sets, &selected, &weights));
        let mut intents: Vec<Intent> = Vec::new();

        // Row "c" has no counts at all.
        for state in JobState::ALL {
            let x = x_of(&table, state.column());
            table.handle_pointer(&PointerEvent::click(x, 3), &ScrollWindow::new(), &mut intents);
        }
        assert!(intents.is_empty());
    }

    #[test]
    fn every_state_column_routes_its_own_label() {
        let sets = vec![
            JobSet::new("x", "t")
                .with_queued(1)
                .with_pending(1)
                .with_running(1)
                .with_succeeded(1)
                .with_failed(1),
        ];
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&sets, &selected, &weights));
        let mut intents: Vec<Intent> = Vec::new();

        for state in JobState::ALL {
            let x = x_of(&table, state.column());
            table.handle_pointer(&PointerEvent::click(x, 1), &ScrollWindow::new(), &mut intents);
        }

        let labels: Vec<String> = intents
            .iter()
            .map(|intent| match intent {
                Intent::OpenJobSet { job_set_id, state } => format!("{job_set_id}:{state}"),
                other => panic!("unexpected intent {other:?}"),
            })
            .collect();
        assert_eq!(
            labels,
            vec!["x:Queued", "x:Pending", "x:Running", "x:Succeeded", "x:Failed"]
        );
    }

    #[test]
    fn clicks_on_id_and_time_cells_are_inert() {
        let sets = sample();
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let table = JobSetTable::new(props(&sets, &selected, &weights));
        let mut intents: Vec<Intent> = Vec::new();

        for column in [ColumnKey::JobSetId, ColumnKey::LatestSubmissionTime] {
            let x = x_of(&table, column);
            table.handle_pointer(&PointerEvent::click(x, 1), &ScrollWindow::new(), &mut intents);
        }
        assert!(intents.is_empty());
    }

    #[test]
    fn hidden_column_cannot_be_clicked() {
        let sets = sample();
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default().with_weight(ColumnKey::JobsFailed, 0.0);
        let table =
            JobSetTable::new(props(&sets, &selected, &weights)).with_styles(Styles::plain());
        let mut intents: Vec<Intent> = Vec::new();

        // Where the failed column used to be is now past the last column.
        table.handle_pointer(&PointerEvent::click(96, 1), &ScrollWindow::new(), &mut intents);
        assert!(intents.is_empty());
        assert!(!table.lines(&ScrollWindow::new())[0].contains("Failed"));
    }
}

// ============================================================================
// Sort Header
// ============================================================================

mod sort_header {
    use super::*;

    #[test]
    fn clicking_time_header_requests_opposite_order() {
        let sets = sample();
        let selected = SelectedJobSets::new();
        let weights = ColumnWeights::default();
        let mut p = props(&sets, &selected, &weights);
        p.newest_first = false;
        let table = JobSetTable::new(p).with_styles(Styles::plain());

        assert!(table.lines(&ScrollWindow::new())[0].contains("Submission Time ▲"));

        let mut intents: Vec<Intent> = Vec::new();
        let x = x_of(&table, ColumnKey::LatestSubmissionTime);
        table.handle_pointer(&PointerEvent::click(x, 0), &ScrollWindow::new(), &mut intents);
        assert_eq!(intents, vec![Intent::ChangeOrder { newest_first: true }]);
    }
}
