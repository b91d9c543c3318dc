// SPDX-License-Identifier: MPL-2.0
use dicebench::application::port::{MediaEvent, MediaTransport};
use dicebench::domain::catalog::{Catalog, DieFace};
use dicebench::domain::quiz::{QuizSession, QuizState};
use dicebench::domain::video::{PlaybackSpeed, VideoFrame, VideoMetadata};
use dicebench::error::VideoError;
use dicebench::ui::quiz::{Event, Message, PlaybackOptions, State};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Transport that hands out a scripted clip: metadata, then one frame.
#[derive(Clone, Default)]
struct ScriptedTransport {
    loads: Arc<Mutex<Vec<PathBuf>>>,
    pending: Vec<MediaEvent>,
}

impl MediaTransport for ScriptedTransport {
    fn load(&mut self, path: &Path) -> Result<(), VideoError> {
        self.loads.lock().unwrap().push(path.to_path_buf());
        self.pending.push(MediaEvent::Loaded(VideoMetadata::new(
            4,
            4,
            Duration::from_millis(500),
            30.0,
        )));
        self.pending.push(MediaEvent::Frame(
            VideoFrame::from_rgba(4, 4, vec![255; 64], Duration::ZERO).unwrap(),
        ));
        Ok(())
    }

    fn play(&mut self) -> Result<(), VideoError> {
        Ok(())
    }

    fn pause(&mut self) -> Result<(), VideoError> {
        Ok(())
    }

    fn seek(&mut self, _position: Duration) -> Result<(), VideoError> {
        Ok(())
    }

    fn set_rate(&mut self, _speed: PlaybackSpeed) -> Result<(), VideoError> {
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.pending)
    }
}

fn catalog() -> Catalog {
    Catalog::from_raw([(1, "one.webm", 5), (2, "two.webm", 3)]).unwrap()
}

fn face(value: u8) -> DieFace {
    DieFace::new(value).unwrap()
}

/// Answers each clip with the face `pick` returns for its id.
fn play_session(session: &mut QuizSession, pick: impl Fn(u32) -> u8) {
    while let Some(item) = session.current_item() {
        let guess = face(pick(item.id));
        session.select_answer(guess);
        session.confirm().expect("staged answer is accepted");
    }
}

#[test]
fn all_correct_answers_score_full_marks() {
    let mut session = QuizSession::new();
    session.start(&catalog(), &mut StdRng::seed_from_u64(11));
    play_session(&mut session, |id| if id == 1 { 5 } else { 3 });

    assert_eq!(session.state(), QuizState::Completed);
    assert_eq!(session.accuracy(), Some(100.0));
}

#[test]
fn one_miss_out_of_two_scores_half() {
    let mut session = QuizSession::new();
    session.start(&catalog(), &mut StdRng::seed_from_u64(12));
    play_session(&mut session, |id| if id == 1 { 1 } else { 3 });

    assert_eq!(session.accuracy(), Some(50.0));
    let results = session.results().unwrap();
    assert_eq!(results.iter().filter(|r| r.is_correct()).count(), 1);
}

#[test]
fn restart_after_completion_starts_over() {
    let catalog = catalog();
    let mut session = QuizSession::new();
    session.start(&catalog, &mut StdRng::seed_from_u64(13));
    play_session(&mut session, |_| 6);
    assert_eq!(session.state(), QuizState::Completed);

    session.restart();
    assert_eq!(session.state(), QuizState::NotStarted);
    assert_eq!(session.answered(), 0);
    assert!(session.accuracy().is_none());

    session.start(&catalog, &mut StdRng::seed_from_u64(14));
    assert_eq!(session.progress(), (0, 2));
    assert!(session.current_item().is_some());
}

#[test]
fn quiz_screen_plays_through_every_clip() {
    let transport = ScriptedTransport::default();
    let loads = Arc::clone(&transport.loads);
    let factory = move || -> Box<dyn MediaTransport> { Box::new(transport.clone()) };

    let mut quiz = State::new(
        catalog(),
        Some(PathBuf::from("/media")),
        PlaybackOptions::default(),
        Box::new(factory),
    );
    quiz.start_with(&mut StdRng::seed_from_u64(21));

    let mut completion = None;
    while let Some(item) = quiz.session().current_item().cloned() {
        assert_eq!(quiz.tick(Instant::now()), Event::None);
        let player = quiz.player().expect("a clip is loaded");
        assert!(player.status().is_loaded());
        assert!(player.frame().is_some());

        quiz.update(Message::SelectAnswer(item.outcome));
        if let Event::Completed { accuracy } = quiz.update(Message::Confirm) {
            completion = Some(accuracy);
        }
    }

    assert_eq!(completion, Some(100.0));
    assert!(quiz.player().is_none());
    let loads = loads.lock().unwrap();
    assert_eq!(loads.len(), 2);
    assert!(loads.iter().all(|path| path.starts_with("/media")));
}
