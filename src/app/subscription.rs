// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions exist: a periodic tick, fast while a clip is on
//! screen and slow while only timed feedback is pending, and a global
//! pointer listener that only runs during a pan or pinch on the clip.

use super::Message;
use crate::ui::quiz;
use crate::ui::state::PointerId;
use iced::{event, mouse, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Poll interval while a clip is loaded.
pub const PLAYBACK_TICK: Duration = Duration::from_millis(16);

/// Interval for toasts and the citation confirmation.
pub const FEEDBACK_TICK: Duration = Duration::from_millis(100);

pub fn create_tick_subscription(clip_active: bool, feedback_pending: bool) -> Subscription<Message> {
    if clip_active {
        time::every(PLAYBACK_TICK).map(Message::Tick)
    } else if feedback_pending {
        time::every(FEEDBACK_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Routes pointer moves and releases to the quiz while a gesture runs.
///
/// Events are taken whatever their capture status: the drag started on the
/// clip and must follow the pointer over other widgets.
pub fn create_gesture_subscription(gesture_active: bool) -> Subscription<Message> {
    if gesture_active {
        event::listen_with(|event, _status, _window| gesture_message(&event))
    } else {
        Subscription::none()
    }
}

fn gesture_message(event: &Event) -> Option<Message> {
    let message = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            quiz::Message::PointerMoved(PointerId::Mouse, *position)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            quiz::Message::PointerReleased(PointerId::Mouse)
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            quiz::Message::PointerMoved(PointerId::Finger(id.0), *position)
        }
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) => quiz::Message::PointerReleased(PointerId::Finger(id.0)),
        Event::Window(window::Event::Unfocused) | Event::Mouse(mouse::Event::CursorLeft) => {
            quiz::Message::GestureCancelled
        }
        _ => return None,
    };
    Some(Message::Quiz(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn cursor_moves_become_pointer_moves() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(3.0, 4.0),
        });
        assert!(matches!(
            gesture_message(&event),
            Some(Message::Quiz(quiz::Message::PointerMoved(PointerId::Mouse, p))) if p == Point::new(3.0, 4.0)
        ));
    }

    #[test]
    fn finger_lift_releases_that_finger() {
        let event = Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(7),
            position: Point::ORIGIN,
        });
        assert!(matches!(
            gesture_message(&event),
            Some(Message::Quiz(quiz::Message::PointerReleased(PointerId::Finger(7))))
        ));
    }

    #[test]
    fn focus_loss_cancels_gesture() {
        let event = Event::Window(window::Event::Unfocused);
        assert!(matches!(
            gesture_message(&event),
            Some(Message::Quiz(quiz::Message::GestureCancelled))
        ));
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert!(gesture_message(&event).is_none());
    }
}
