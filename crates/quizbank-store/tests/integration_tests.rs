//! Integration tests for quizbank-store
//!
//! These tests build real bank files and read them back through the catalog.

use quizbank_domain::{AnswerOption, DraftQuestion, Question};
use quizbank_store::{load_questions, BuildMode, JsonBank, StoreError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn bank_in(dir: &TempDir) -> (JsonBank, PathBuf) {
    let path = dir.path().join("preguntas.json");
    (JsonBank::new(&path), path)
}

fn draft(stem: &str, letters: &[char], answer: &str) -> DraftQuestion {
    DraftQuestion {
        stem: stem.to_string(),
        options: letters
            .iter()
            .map(|&l| AnswerOption::new(l, format!("opción {}", l)))
            .collect(),
        answer: answer.to_string(),
        ..DraftQuestion::default()
    }
}

fn drafts(prefix: &str, n: usize) -> Vec<DraftQuestion> {
    (1..=n)
        .map(|i| draft(&format!("{} {}", prefix, i), &['A', 'B', 'C'], "B"))
        .collect()
}

fn group_ids(questions: &[Question], subject: &str, source: &str) -> Vec<String> {
    questions
        .iter()
        .filter(|q| q.subject == subject && q.source == source)
        .map(|q| q.id.clone())
        .collect()
}

#[test]
fn test_replace_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);
    let input = drafts("Pregunta", 3);

    assert!(bank.build("Bases de Datos", "Test 1", &input, BuildMode::Replace));
    let first = fs::read_to_string(&path).unwrap();
    assert!(bank.build("Bases de Datos", "Test 1", &input, BuildMode::Replace));
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_replace_mode_scenario() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);

    assert!(bank.build("X", "Y", &drafts("Vieja", 5), BuildMode::Append));
    let report = bank
        .try_build("X", "Y", &drafts("Nueva", 3), BuildMode::Replace)
        .unwrap();
    assert_eq!(report.removed, 5);
    assert_eq!(report.added(), 3);

    let questions = load_questions(&path);
    assert_eq!(group_ids(&questions, "X", "Y"), vec!["X_Y_001", "X_Y_002", "X_Y_003"]);
    assert!(questions.iter().all(|q| q.stem.starts_with("Nueva")));
}

#[test]
fn test_append_mode_scenario() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);

    assert!(bank.build("X", "Y", &drafts("Primera", 2), BuildMode::Append));
    assert!(bank.build("X", "Y", &drafts("Segunda", 2), BuildMode::Append));

    let questions = load_questions(&path);
    assert_eq!(
        group_ids(&questions, "X", "Y"),
        vec!["X_Y_001", "X_Y_002", "X_Y_003", "X_Y_004"]
    );
    assert_eq!(questions[0].stem, "Primera 1");
    assert_eq!(questions[3].stem, "Segunda 2");
}

#[test]
fn test_invalid_question_does_not_consume_a_number() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);
    let input = vec![
        draft("Uno", &['A', 'B', 'C'], "A"),
        draft("Dos opciones", &['A', 'B'], "A"),
        draft("Tres", &['A', 'B', 'C'], "C"),
    ];

    let report = bank.try_build("X", "Y", &input, BuildMode::Replace).unwrap();
    assert_eq!(report.rejected, 1);

    let questions = load_questions(&path);
    assert_eq!(group_ids(&questions, "X", "Y"), vec!["X_Y_001", "X_Y_002"]);
    assert_eq!(questions[1].stem, "Tres");
}

#[test]
fn test_persisted_questions_hold_invariants() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);
    let input = vec![
        draft("Válida", &['C', 'A', 'B'], "b"),
        draft("Cinco", &['A', 'B', 'C', 'D', 'E'], "E"),
        draft("Seis", &['A', 'B', 'C', 'D', 'E', 'F'], "A"),
        draft("Sin letra", &['A', 'B', 'C'], "Z"),
    ];

    bank.build("Redes", "Parcial", &input, BuildMode::Replace);

    let questions = load_questions(&path);
    assert_eq!(questions.len(), 3);
    for q in &questions {
        assert!((3..=5).contains(&q.options.len()));
        assert!(q.answer.is_empty() || q.options.iter().any(|o| o.letter.to_string() == q.answer));
        let letters: Vec<char> = q.options.iter().map(|o| o.letter).collect();
        let mut sorted = letters.clone();
        sorted.sort();
        assert_eq!(letters, sorted);
    }
    assert_eq!(questions[0].answer, "B");
    assert_eq!(questions[2].answer, "");
}

#[test]
fn test_groups_are_independent_and_sorted() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);

    bank.build("Programación", "Test", &drafts("P", 2), BuildMode::Replace);
    bank.build("Bases de Datos", "Test 1", &drafts("B", 2), BuildMode::Replace);
    bank.build("Programación", "Test", &drafts("P2", 1), BuildMode::Replace);

    let questions = load_questions(&path);
    let ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["BDD_T1_001", "BDD_T1_002", "P_T_001"]);
}

#[test]
fn test_corrupt_bank_is_rebuilt() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);
    fs::write(&path, "[[[ broken").unwrap();

    assert!(bank.build("X", "Y", &drafts("Q", 1), BuildMode::Append));
    assert_eq!(load_questions(&path).len(), 1);
}

#[test]
fn test_unreadable_record_keeps_other_groups() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);
    assert!(bank.build("Redes", "Parcial", &drafts("Q", 2), BuildMode::Replace));

    let mut value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    value["preguntas"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({ "id": "Z_Z_001", "asignatura": "Z", "origen": "Z" }));
    let before = serde_json::to_string_pretty(&value).unwrap();
    fs::write(&path, &before).unwrap();

    assert!(!bank.build("X", "Y", &drafts("Q", 1), BuildMode::Append));
    let err = bank
        .try_build("X", "Y", &drafts("Q", 1), BuildMode::Replace)
        .unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_exhausted_sequence_leaves_bank_untouched() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);
    assert!(bank.build("X", "Y", &drafts("Q", 1), BuildMode::Append));

    let contents = fs::read_to_string(&path)
        .unwrap()
        .replace("X_Y_001", &format!("X_Y_{}", u64::MAX));
    fs::write(&path, &contents).unwrap();

    assert!(!bank.build("X", "Y", &drafts("Q", 1), BuildMode::Append));
    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn test_no_valid_questions_leaves_bank_untouched() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);
    bank.build("X", "Y", &drafts("Q", 2), BuildMode::Append);
    let before = fs::read_to_string(&path).unwrap();

    let result = bank.try_build("X", "Y", &[draft("Mala", &['A'], "A")], BuildMode::Replace);
    assert!(matches!(result, Err(StoreError::NoValidQuestions(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_wire_format_field_names() {
    let dir = TempDir::new().unwrap();
    let (bank, path) = bank_in(&dir);
    let mut question = draft("¿Qué?", &['A', 'B', 'C'], "A");
    question.original_answer = Some("RESPUESTA CORRECTA: A".to_string());
    bank.build("Bases de Datos", "Test 1", &[question], BuildMode::Replace);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let stored = &raw["preguntas"][0];
    assert_eq!(stored["id"], "BDD_T1_001");
    assert_eq!(stored["asignatura"], "Bases de Datos");
    assert_eq!(stored["origen"], "Test 1");
    assert_eq!(stored["enunciado"], "¿Qué?");
    assert_eq!(stored["opciones"][0]["letra"], "A");
    assert_eq!(stored["respuesta_correcta"], "A");
    assert!(stored.get("respuesta_original").is_none());
}
