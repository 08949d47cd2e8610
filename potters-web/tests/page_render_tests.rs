use futures::executor::block_on;
use potters_game::{QuestionBank, QuizConfig, QuizSession};
use potters_web::pages::intro::{IntroPage, IntroPageProps};
use potters_web::pages::quiz::{QuizPage, QuizPageProps};
use potters_web::pages::summary::{SummaryPage, SummaryPageProps};
use yew::{Callback, LocalServerRenderer};

fn shipped_bank() -> QuestionBank {
    QuestionBank::from_json(include_str!("../static/assets/data/questions.json")).unwrap()
}

#[test]
fn intro_page_renders_toggle_start_and_high_score_copy() {
    let html = block_on(
        LocalServerRenderer::<IntroPage>::with_props(IntroPageProps {
            best: None,
            timer_enabled: false,
            on_toggle_timer: Callback::noop(),
            on_start: Callback::noop(),
        })
        .render(),
    );

    assert!(
        html.contains("No high score yet"),
        "intro should invite a first record: {html}"
    );
    assert!(html.contains("Start quiz"), "missing start button: {html}");
    assert!(html.contains("timerToggle"), "missing timer toggle: {html}");
}

#[test]
fn intro_page_shows_the_stored_best() {
    let html = block_on(
        LocalServerRenderer::<IntroPage>::with_props(IntroPageProps {
            best: Some(8),
            timer_enabled: true,
            on_toggle_timer: Callback::noop(),
            on_start: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("High score: 8"), "missing best line: {html}");
}

fn quiz_props(session: QuizSession) -> QuizPageProps {
    QuizPageProps {
        session,
        on_select: Callback::noop(),
        on_activate: Callback::noop(),
        on_submit: Callback::noop(),
        on_advance: Callback::noop(),
        on_tick: Callback::noop(),
        on_restart: Callback::noop(),
    }
}

#[test]
fn quiz_page_renders_question_choices_and_meta() {
    let session = QuizSession::start(&shipped_bank(), QuizConfig::default(), 1337);
    let question_text = session.current_question().unwrap().text.clone();
    let html = block_on(LocalServerRenderer::<QuizPage>::with_props(quiz_props(session)).render());

    assert!(html.contains(&question_text), "missing question: {html}");
    for key in ["data-key=\"1\"", "data-key=\"2\"", "data-key=\"3\"", "data-key=\"4\""] {
        assert!(html.contains(key), "expected choice with {key}: {html}");
    }
    assert!(html.contains("Question 1 / 10"), "missing progress: {html}");
    assert!(html.contains("Score: 0"), "missing score line: {html}");
    assert!(html.contains("Next (N)"), "missing advance label: {html}");
    assert!(html.contains("disabled"), "advance should start disabled: {html}");
}

#[test]
fn quiz_page_shows_the_armed_countdown() {
    let session = QuizSession::start(
        &shipped_bank(),
        QuizConfig {
            timer_enabled: true,
        },
        1337,
    );
    let html = block_on(LocalServerRenderer::<QuizPage>::with_props(quiz_props(session)).render());
    assert!(html.contains("Time: 20s"), "missing countdown: {html}");
}

#[test]
fn revealed_quiz_page_marks_the_answer_and_enables_next() {
    let mut session = QuizSession::start(&shipped_bank(), QuizConfig::default(), 7);
    let correct = session.current_question().unwrap().correct_index;
    let wrong = (correct + 1) % 4;
    session.select(wrong);
    session.submit();
    let html = block_on(LocalServerRenderer::<QuizPage>::with_props(quiz_props(session)).render());

    assert!(html.contains("choice correct"), "correct mark missing: {html}");
    assert!(
        html.contains("choice incorrect"),
        "incorrect mark missing: {html}"
    );
    assert!(
        html.contains("Incorrect. Correct answer:"),
        "feedback copy missing: {html}"
    );
    assert!(
        html.contains("data-revealed=\"true\""),
        "feedback should flag the reveal: {html}"
    );
}

#[test]
fn summary_page_renders_final_copy() {
    let bank = shipped_bank();
    let mut session = QuizSession::start(&bank, QuizConfig::default(), 21);
    for _ in 0..bank.len() {
        let correct = session.current_question().unwrap().correct_index;
        session.select(correct);
        session.submit();
        session.advance();
    }
    let view = potters_game::SummaryView::for_session(&session, true).unwrap();

    let html = block_on(
        LocalServerRenderer::<SummaryPage>::with_props(SummaryPageProps {
            view,
            best: Some(10),
            on_play_again: Callback::noop(),
        })
        .render(),
    );

    assert!(
        html.contains("You answered 10 out of 10 correctly."),
        "missing summary text: {html}"
    );
    assert!(
        html.contains("New high score — well done!"),
        "missing record celebration: {html}"
    );
    assert!(html.contains("Final score: 10"), "missing final score: {html}");
    assert!(html.contains("Play again"), "missing play-again button: {html}");
}
