use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::Conversation;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, MessageList, StarterGrid};

/// Screen regions for one frame.
pub struct UiAreas {
    pub header: Rect,
    pub messages: Rect,
    /// Zero-height once the conversation has moved past the welcome message
    pub starters: Rect,
    pub input: Rect,
}

pub fn layout(area: Rect, conversation: &Conversation, tui: &TuiState) -> UiAreas {
    use Constraint::{Length, Min};

    let starters_height = if conversation.is_fresh() {
        StarterGrid::height(area.width)
    } else {
        0
    };
    let input_height = tui.input_box.calculate_height(area.width);

    let [header, messages, starters, input] = Layout::vertical([
        Length(1),
        Min(0),
        Length(starters_height),
        Length(input_height),
    ])
    .areas(area);

    UiAreas {
        header,
        messages,
        starters,
        input,
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    conversation: &Conversation,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    let areas = layout(frame.area(), conversation, tui);
    let awaiting = conversation.is_awaiting_response;

    MessageList::new(
        &mut tui.message_list,
        &conversation.messages,
        awaiting,
        spinner_frame,
    )
    .render(frame, areas.messages);

    // After the list so "↓ New" reflects this frame's scroll position
    Header::new(awaiting, tui.message_list.has_unseen_content).render(frame, areas.header);

    if areas.starters.height > 0 {
        StarterGrid::new(&mut tui.starters, awaiting).render(frame, areas.starters);
    } else {
        tui.starters.clear();
    }

    tui.input_box.awaiting = awaiting;
    tui.input_box.render(frame, areas.input);
}
