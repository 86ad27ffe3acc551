use assistant_core::{
    rank, respond, Assistant, Corpus, FaqRecord, MatchResult, ResponseMode,
    GENERIC_HELP_CATEGORY,
};

fn builtin() -> Corpus {
    Corpus::builtin().expect("embedded corpus loads")
}

fn mentions(record: &FaqRecord, term: &str) -> bool {
    record.question.to_lowercase().contains(term)
        || record.answer.to_lowercase().contains(term)
        || record.keywords.iter().any(|k| k.to_lowercase().contains(term))
}

fn only(record: &FaqRecord) -> Corpus {
    Corpus::new(vec![record.clone()]).unwrap()
}

#[test]
fn earthquake_question_gets_direct_answer() {
    let corpus = builtin();
    let result = rank("qué hacer en un sismo", &corpus);

    let best = result.best.clone().expect("a match");
    assert_eq!(best.id, "11");
    assert_eq!(best.category, "Preparación Sismos");
    assert!(result.score > 3);

    let reply = respond(&result, &corpus, 2);
    assert_eq!(reply.mode, ResponseMode::DirectAnswer);
    assert_eq!(reply.category, best.category);
    assert!(reply.text.starts_with(&best.answer));
}

#[test]
fn empty_query_gets_generic_help() {
    let corpus = builtin();
    let result = rank("", &corpus);
    assert_eq!(result, MatchResult::empty(String::new()));

    for exchange_count in [0, 1, 2, 3, 50] {
        let reply = respond(&result, &corpus, exchange_count);
        assert_eq!(reply.mode, ResponseMode::GenericHelp);
        assert_eq!(reply.category, GENERIC_HELP_CATEGORY);
        assert_eq!(reply.exchange_count, exchange_count);
    }
}

// "Same family" means every returned record mentions the formal term
// "terremoto". The best records differ on the embedded corpus: "temblorazo"
// lands on the colloquial-language entry whose answer explains it is a
// terremoto, while "terremoto" lands on the phenomenon entry.
#[test]
fn colloquial_quake_resolves_to_earthquake_records() {
    let corpus = builtin();

    let formal = rank("terremoto", &corpus);
    let colloquial = rank("temblorazo", &corpus);

    assert_eq!(formal.best.as_ref().unwrap().id, "fenomeno_terremoto");
    let best = colloquial.best.as_ref().unwrap();
    assert!(mentions(best, "terremoto"));
    assert!(colloquial
        .suggestions
        .iter()
        .all(|s| mentions(&s.record, "terremoto")));
}

#[test]
fn colloquial_bridge_works_without_literal_keyword() {
    let corpus = Corpus::new(vec![
        FaqRecord {
            id: "kit".to_string(),
            question: "¿Qué lleva el kit?".to_string(),
            answer: "Agua y linterna.".to_string(),
            category: "Kits".to_string(),
            keywords: vec!["kit".to_string()],
        },
        FaqRecord {
            id: "quake".to_string(),
            question: "Terremoto".to_string(),
            answer: "Protégete bajo muebles fuertes.".to_string(),
            category: "Fenómenos".to_string(),
            keywords: vec!["terremoto".to_string(), "sismo".to_string()],
        },
    ])
    .unwrap();

    let result = rank("temblorazo", &corpus);
    assert_eq!(result.best.unwrap().id, "quake");
    assert_eq!(result.score, 8);
    assert!(result.suggestions.is_empty());
}

#[test]
fn colloquial_phrase_adds_at_least_boost() {
    let corpus = builtin();
    let eruption = only(corpus.get("fenomeno_erupcion").unwrap());

    let with = rank("el volcán está bravo", &eruption).score;
    let without = rank("el volcán está", &eruption).score;
    assert!(with >= without + 8, "{with} vs {without}");
}

#[test]
fn exact_phrase_adds_at_least_fifteen() {
    let base = FaqRecord {
        id: "x".to_string(),
        question: "¿Dónde queda el refugio?".to_string(),
        answer: "Consulta a las autoridades.".to_string(),
        category: "Refugios".to_string(),
        keywords: vec!["refugio".to_string()],
    };
    let mut phrased = base.clone();
    phrased.question = "¿Dónde queda la zona segura del barrio?".to_string();

    let without = rank("zona segura", &only(&base)).score;
    let with = rank("zona segura", &only(&phrased)).score;
    assert!(with >= without + 15, "{with} vs {without}");
}

#[test]
fn ranking_properties_hold_on_builtin() {
    let corpus = builtin();
    let queries = [
        "volcán bravo",
        "palo de agua en mi barrio",
        "kit",
        "números de bomberos",
        "cómo reportar",
        "xyz",
        "deslave",
        "qué es la alerta roja",
    ];

    for query in queries {
        let result = rank(query, &corpus);
        assert_eq!(result.score == 0, result.best.is_none(), "{query}");
        assert!(result.suggestions.len() <= 2, "{query}");
        assert!(result
            .suggestions
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
        if let Some(best) = &result.best {
            assert!(result.suggestions.iter().all(|s| s.record.id != best.id));
            assert!(result.suggestions.iter().all(|s| s.score <= result.score));
        }
        assert_eq!(result, rank(query, &corpus), "{query}");
    }
}

#[test]
fn earlier_record_wins_ties() {
    let record = |id: &str| FaqRecord {
        id: id.to_string(),
        question: "Pregunta".to_string(),
        answer: "Respuesta".to_string(),
        category: "General".to_string(),
        keywords: vec!["linterna".to_string()],
    };

    let forward = Corpus::new(vec![record("first"), record("second")]).unwrap();
    let reversed = Corpus::new(vec![record("second"), record("first")]).unwrap();

    assert_eq!(rank("linterna", &forward).best.unwrap().id, "first");
    assert_eq!(rank("linterna", &reversed).best.unwrap().id, "second");
}

#[test]
fn category_fallback_on_builtin() {
    let corpus = builtin();
    // matches no record text but names a category
    let result = rank("lingüística", &corpus);
    let reply = respond(&result, &corpus, 3);

    assert!(result.best.is_none());
    assert_eq!(reply.mode, ResponseMode::CategoryFallback);
    assert_eq!(reply.category, "Educación Lingüística");
    assert!(reply.text.contains(&corpus.get("palo_de_agua_educativo").unwrap().answer));
    assert!(reply.text.contains("• Volcán bravo"));
    assert!(reply.text.contains("• Temporal grande"));
    assert!(!reply.text.contains("• Temblorazo"));
}

#[test]
fn assistant_answer_round() {
    let assistant = Assistant::builtin().unwrap();
    let (result, reply) = assistant.answer("¿Qué es Guardian Nica?", 1);
    assert_eq!(result.best.unwrap().id, "app1");
    assert_eq!(reply.mode, ResponseMode::DirectAnswer);
    assert_eq!(reply.category, "Sobre Guardian Nica");
    assert!(reply.shows_topic_browser());
}
