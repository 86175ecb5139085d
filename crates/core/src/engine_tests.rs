use super::*;
use polyfuse_io::Entry;

fn run(entries: Vec<(i32, &str, usize, f64)>) -> Run {
    let mut r = Run::default();
    let mut prev_qid: Option<i32> = None;
    for (qid, docno, rank, score) in entries {
        if prev_qid != Some(qid) {
            r.topics.push(qid);
            prev_qid = Some(qid);
        }
        r.max_rank = r.max_rank.max(rank);
        r.entries.push(Entry {
            qid,
            docno: docno.to_string(),
            rank,
            score,
            system_name: "sys".to_string(),
        });
    }
    r
}

fn output_lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn combsum_two_runs_one_topic() {
    let run_a = run(vec![(1, "docA", 1, 0.9), (1, "docB", 2, 0.6)]);
    let run_b = run(vec![(1, "docA", 1, 0.8), (1, "docC", 2, 0.5)]);

    let engine = Engine::new().set_fusion(Fusion::CombSum, 60, 0.8);
    let engine = engine.fold(&run_a, 1.0, Some(Normalization::MinMax));
    let engine = engine.fold(&run_b, 1.0, Some(Normalization::MinMax));

    let mut out = Vec::new();
    engine.present(&mut out, "run1", 3, false).unwrap();

    let lines = output_lines(out);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1 Q0 docA 1 2.000000000 run1");
}

#[test]
fn heap_capacity_is_the_requested_depth_not_the_weight_table_length() {
    // Two 2-entry runs give `weights.len() == 2`, but there are 3 distinct
    // docnos at depth 3; the output heap must not be clamped to 2.
    let run_a = run(vec![(1, "docA", 1, 0.9), (1, "docB", 2, 0.6)]);
    let run_b = run(vec![(1, "docA", 1, 0.8), (1, "docC", 2, 0.5)]);

    let engine = Engine::new().set_fusion(Fusion::CombSum, 60, 0.8);
    let engine = engine.fold(&run_a, 1.0, Some(Normalization::MinMax));
    let engine = engine.fold(&run_b, 1.0, Some(Normalization::MinMax));

    let mut out = Vec::new();
    engine.present(&mut out, "run1", 3, false).unwrap();

    assert_eq!(output_lines(out).len(), 3);
}

#[test]
fn topic_seen_only_in_a_later_input_is_not_accumulated() {
    // Topic 2 never appears in the first input, so it must not be created
    // or emitted, per the "topic sets in later files are not consulted"
    // precondition.
    let run_a = run(vec![(1, "docA", 1, 0.9)]);
    let run_b = run(vec![(2, "docB", 1, 0.9)]);

    let engine = Engine::new().set_fusion(Fusion::CombSum, 60, 0.8);
    let engine = engine.fold(&run_a, 1.0, None);
    let engine = engine.fold(&run_b, 1.0, None);

    let mut out = Vec::new();
    engine.present(&mut out, "run1", 10, false).unwrap();

    let lines = output_lines(out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("1 "));
}

#[test]
fn rrf_k_60_combines_two_runs_ranking_same_doc_first() {
    let run_a = run(vec![(1, "docA", 1, 0.0), (1, "docB", 2, 0.0)]);
    let run_b = run(vec![(1, "docA", 1, 0.0), (1, "docC", 2, 0.0)]);

    let engine = Engine::new().set_fusion(Fusion::Rrf, 60, 0.8);
    let engine = engine.fold(&run_a, 1.0, None);
    let engine = engine.fold(&run_b, 1.0, None);

    let mut out = Vec::new();
    engine.present(&mut out, "run1", 3, false).unwrap();

    let lines = output_lines(out);
    assert!(lines[0].starts_with("1 Q0 docA 1 0.032786885"));
}

#[test]
fn zero_depth_is_rejected() {
    let run_a = run(vec![(1, "docA", 1, 0.9)]);
    let engine = Engine::new().set_fusion(Fusion::CombSum, 60, 0.8);
    let engine = engine.fold(&run_a, 1.0, None);

    let mut out = Vec::new();
    let err = engine.present(&mut out, "run1", 0, false).unwrap_err();
    assert!(matches!(err, CoreError::ZeroDepth));
}

#[test]
fn empty_input_file_produces_no_output_but_does_not_stop_processing() {
    let empty = Run::default();
    let run_a = run(vec![(1, "docA", 1, 0.9)]);

    let engine = Engine::new().set_fusion(Fusion::CombSum, 60, 0.8);
    let engine = engine.fold(&empty, 1.0, None);
    let engine = engine.fold(&run_a, 1.0, None);

    let mut out = Vec::new();
    engine.present(&mut out, "run1", 10, false).unwrap();

    let lines = output_lines(out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("1 Q0 docA 1"));
}

#[test]
fn topics_are_emitted_in_first_seen_order() {
    let run_a = run(vec![(5, "docA", 1, 0.9), (2, "docB", 1, 0.5)]);

    let engine = Engine::new().set_fusion(Fusion::CombSum, 60, 0.8);
    let engine = engine.fold(&run_a, 1.0, None);

    let mut out = Vec::new();
    engine.present(&mut out, "run1", 10, false).unwrap();

    let lines = output_lines(out);
    assert!(lines[0].starts_with("5 "));
    assert!(lines[1].starts_with("2 "));
}

#[test]
fn tie_prevention_breaks_equal_scores_deterministically() {
    let run_a = run(vec![(1, "docA", 1, 1.0), (1, "docB", 2, 1.0), (1, "docC", 3, 1.0)]);

    let engine = Engine::new().set_fusion(Fusion::CombSum, 60, 0.8);
    let engine = engine.fold(&run_a, 1.0, None);

    let mut out = Vec::new();
    engine.present(&mut out, "run1", 10, true).unwrap();

    let lines = output_lines(out);
    // All three tie at 1.0 pre-perturbation; post-perturbation scores must
    // be strictly decreasing so the printed order is well-defined.
    let scores: Vec<f64> = lines
        .iter()
        .map(|l| l.split_whitespace().nth(4).unwrap().parse().unwrap())
        .collect();
    assert!(scores[0] > scores[1]);
    assert!(scores[1] > scores[2]);
}
