use leptos::*;

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[component]
/// Scratch notes. Contents live only while the window is open.
pub fn NotesPanel() -> impl IntoView {
    let text = create_rw_signal(String::new());

    view! {
        <div class="app-shell app-notes">
            <textarea
                aria-label="Notes"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <div class="app-statusbar">
                <span>{move || format!("{} words", word_count(&text.get()))}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_whitespace_separated_words() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one\ttwo \n three "), 3);
    }
}
