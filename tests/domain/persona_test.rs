use ecg_insight::domain::Persona;

#[test]
fn given_all_personas_when_listing_keys_then_match_wire_names() {
    let keys: Vec<&str> = Persona::ALL.iter().map(Persona::key).collect();

    assert_eq!(keys, vec!["cnn", "bilstm", "transformer"]);
}

#[test]
fn given_each_persona_when_building_prompt_then_schema_instruction_is_appended() {
    for persona in Persona::ALL {
        let prompt = persona.system_prompt();
        assert!(prompt.contains("Return ONLY valid JSON in this exact format:"));
        assert!(prompt.contains("\"heartRate\": number"));
        assert!(prompt.contains("Detect:"));
    }
}

#[test]
fn given_distinct_personas_when_building_prompts_then_framings_differ() {
    assert!(Persona::Cnn.system_prompt().contains("CNN-based"));
    assert!(Persona::BiLstm.system_prompt().contains("BiLSTM-based"));
    assert!(Persona::Transformer.system_prompt().contains("Transformer-based"));
}
