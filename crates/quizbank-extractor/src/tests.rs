//! End-to-end tests over real .docx files

#[cfg(test)]
mod tests {
    use crate::{Extractor, ExtractorError};
    use docx_rs::{BreakType, Docx, Paragraph, Run};
    use std::fs::File;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// One paragraph per entry; `\n` inside an entry becomes a soft line break
    fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
        let mut docx = Docx::new();
        for text in paragraphs {
            let mut run = Run::new();
            for (i, chunk) in text.split('\n').enumerate() {
                if i > 0 {
                    run = run.add_break(BreakType::TextWrapping);
                }
                run = run.add_text(chunk);
            }
            docx = docx.add_paragraph(Paragraph::new().add_run(run));
        }

        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        docx.build().pack(file).unwrap();
        path
    }

    const HEADERS: [&str; 2] = ["ASIGNATURA: Bases de Datos", "ORIGEN: Test 1"];

    #[test]
    fn test_classic_format() {
        let dir = TempDir::new().unwrap();
        let path = write_docx(
            dir.path(),
            "clasico.docx",
            &[
                HEADERS[0],
                HEADERS[1],
                "PREGUNTA 1. ¿Qué es una clave primaria?",
                "OPCIÓN 1 (A): Un campo único",
                "OPCIÓN 2 (B): Un campo repetido",
                "OPCIÓN 3 (C): Un índice",
                "RESPUESTA CORRECTA: Opción 1 (A)",
            ],
        );

        let parsed = Extractor::default_config().extract_file(&path).unwrap();
        assert_eq!(parsed.subject, "Bases de Datos");
        assert_eq!(parsed.source, "Test 1");
        assert_eq!(parsed.questions.len(), 1);
        assert_eq!(parsed.questions[0].options.len(), 3);
        assert_eq!(parsed.questions[0].answer, "A");
    }

    #[test]
    fn test_bullet_format_matches_classic() {
        let dir = TempDir::new().unwrap();
        let classic = write_docx(
            dir.path(),
            "clasico.docx",
            &[
                HEADERS[0],
                HEADERS[1],
                "PREGUNTA 1. ¿Qué es una clave primaria?",
                "OPCIÓN 1 (A): Un campo único",
                "OPCIÓN 2 (B): Un campo repetido",
                "OPCIÓN 3 (C): Un índice",
                "RESPUESTA CORRECTA: Opción 1 (A)",
            ],
        );
        let bullets = write_docx(
            dir.path(),
            "vinetas.docx",
            &[
                HEADERS[0],
                HEADERS[1],
                "PREGUNTA 1. ¿Qué es una clave primaria?",
                "• A) Un campo único",
                "• B) Un campo repetido",
                "• C) Un índice",
                "RESPUESTA CORRECTA: Opción 1 (A)",
            ],
        );

        let extractor = Extractor::default_config();
        let a = extractor.extract_file(&classic).unwrap();
        let b = extractor.extract_file(&bullets).unwrap();
        assert_eq!(a.questions[0].stem, b.questions[0].stem);
        assert_eq!(a.questions[0].options, b.questions[0].options);
        assert_eq!(a.questions[0].answer, b.questions[0].answer);
    }

    #[test]
    fn test_soft_breaks_split_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_docx(
            dir.path(),
            "saltos.docx",
            &[
                "ASIGNATURA: Programación\nORIGEN: Simulacro Examen",
                "PREGUNTA 1. ¿Qué imprime?\nA) 1\nB) 2\nC) 3\nRESPUESTA CORRECTA: C",
            ],
        );

        let parsed = Extractor::default_config().extract_file(&path).unwrap();
        assert_eq!(parsed.group().id_prefix(), "P_SE_");
        assert_eq!(parsed.questions.len(), 1);
        assert_eq!(parsed.questions[0].answer, "C");
    }

    #[test]
    fn test_malformed_question_dropped() {
        let dir = TempDir::new().unwrap();
        let path = write_docx(
            dir.path(),
            "mal.docx",
            &[
                HEADERS[0],
                HEADERS[1],
                "PREGUNTA 1. Solo dos",
                "A) uno",
                "B) dos",
                "RESPUESTA CORRECTA: A",
                "PREGUNTA 2. Tres",
                "A) uno",
                "B) dos",
                "C) tres",
                "RESPUESTA CORRECTA: B",
            ],
        );

        let parsed = Extractor::default_config().extract_file(&path).unwrap();
        assert_eq!(parsed.dropped, 1);
        assert_eq!(parsed.questions.len(), 1);
        assert_eq!(parsed.questions[0].stem, "Tres");
    }

    #[test]
    fn test_option_e_never_extracted() {
        // E options are silently ignored by the document patterns, so a
        // five-option question reaches the bank with four options
        let dir = TempDir::new().unwrap();
        let path = write_docx(
            dir.path(),
            "cinco.docx",
            &[
                HEADERS[0],
                HEADERS[1],
                "PREGUNTA 1. Cinco opciones",
                "A) uno",
                "B) dos",
                "C) tres",
                "D) cuatro",
                "E) cinco",
                "RESPUESTA CORRECTA: A",
            ],
        );

        let parsed = Extractor::default_config().extract_file(&path).unwrap();
        assert_eq!(parsed.questions[0].letters(), vec!['A', 'B', 'C', 'D']);
    }

    #[test]
    fn test_missing_headers_fails_document() {
        let dir = TempDir::new().unwrap();
        let path = write_docx(dir.path(), "sin.docx", &["PREGUNTA 1. ¿Algo?", "A) a"]);

        let err = Extractor::default_config().extract_file(&path).unwrap_err();
        assert!(matches!(err, ExtractorError::MissingHeader(name) if name == "sin.docx"));
    }

    #[test]
    fn test_corrupt_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roto.docx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let err = Extractor::default_config().extract_file(&path).unwrap_err();
        assert!(matches!(err, ExtractorError::Docx { .. }));
    }

    #[test]
    fn test_discover_then_extract() {
        let dir = TempDir::new().unwrap();
        write_docx(
            dir.path(),
            "t1.docx",
            &[HEADERS[0], HEADERS[1], "PREGUNTA 1. ¿X?", "A) a", "B) b", "C) c"],
        );
        std::fs::write(dir.path().join("~$t1.docx"), b"lock").unwrap();

        let extractor = Extractor::default_config();
        let found = extractor.discover(dir.path()).unwrap();
        assert_eq!(found.len(), 1);

        let parsed = extractor.extract_file(&found[0]).unwrap();
        assert_eq!(parsed.questions.len(), 1);
        assert_eq!(parsed.questions[0].answer, "");
    }
}
