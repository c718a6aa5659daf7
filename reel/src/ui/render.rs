//! Render orchestration for the slideshow TUI.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use reel_core::{Feedback, LocalizedText, Slide};

use crate::app::{App, StudyMode};
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{ChallengeWidget, CountdownWidget, ProgressWidget, ScriptWidget, TenseShiftWidget};

/// Overlay types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    SceneMenu,
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);
    render_stage(frame, app, layout.stage_area);
    render_status_bar(frame, app, layout.status_area);
    render_footer(frame, app, layout.footer_area);

    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, *overlay, area);
    }
}

/// Marquee: the current scene (or lesson) title plus the mode badge.
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title = match app.session.current() {
        Slide::Intro { scene_title, .. }
        | Slide::Script { scene_title, .. }
        | Slide::ExerciseIntro { scene_title, .. } => scene_title.clone(),
        Slide::Timeline { exercise_title, .. } | Slide::Challenge { exercise_title, .. } => {
            exercise_title.clone()
        }
        Slide::Outro { lesson_title, .. } => lesson_title.clone(),
    };

    let mut spans = vec![Span::styled(title.to_uppercase(), theme.marquee_style())];
    if app.mode != StudyMode::Student {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", app.mode.label()),
            theme.accent_style(),
        ));
    }

    let line = Line::from(spans).alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(line), area);
}

/// The stage: one renderer per slide variant.
fn render_stage(frame: &mut Frame, app: &App, area: Rect) {
    match app.session.current() {
        Slide::Intro {
            scene_title,
            description,
            notes,
            ..
        } => render_intro(frame, app, area, scene_title, description, notes.as_ref()),

        Slide::Script {
            scene_title, lines, ..
        } => {
            frame.render_widget(ScriptWidget::new(lines, scene_title, &app.theme), area);
        }

        Slide::ExerciseIntro {
            title,
            description,
            rule,
            teaching,
            ..
        } => render_exercise_intro(frame, app, area, title, description, rule, teaching.as_ref()),

        Slide::Timeline {
            exercise_title,
            shift,
            ..
        } => {
            frame.render_widget(TenseShiftWidget::new(shift, exercise_title, &app.theme), area);
        }

        Slide::Challenge {
            exercise_title,
            prompt,
            answer,
            options,
            number,
            total,
            ..
        } => {
            let widget = ChallengeWidget::new(
                exercise_title,
                prompt,
                answer,
                options,
                *number,
                *total,
                &app.theme,
            )
            .selection(app.selection)
            .feedback(app.session.feedback())
            .submitted(app.session.submitted())
            .reveal(app.mode == StudyMode::Teacher);
            frame.render_widget(widget, area);
        }

        Slide::Outro { lesson_title, .. } => render_outro(frame, app, area, lesson_title),
    }
}

fn render_intro(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    description: &str,
    notes: Option<&LocalizedText>,
) {
    let theme = &app.theme;
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("NOW SHOWING", theme.accent_style())).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(title.to_string(), theme.marquee_style()))
            .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(description.to_string(), theme.text_style()))
            .alignment(Alignment::Center),
    ];
    if let Some(notes) = notes {
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(notes.ru.clone(), theme.muted_style()))
                .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(notes.uz.clone(), theme.muted_style()))
                .alignment(Alignment::Center),
        );
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_exercise_intro(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    description: &str,
    rule: &str,
    teaching: Option<&LocalizedText>,
) {
    let theme = &app.theme;
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(title.to_string(), theme.marquee_style()))
            .alignment(Alignment::Center),
        Line::from(Span::styled(description.to_string(), theme.accent_style()))
            .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(rule.to_string(), theme.text_style()))
            .alignment(Alignment::Center),
    ];
    if let Some(teaching) = teaching {
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(teaching.ru.clone(), theme.muted_style()))
                .alignment(Alignment::Center),
        );
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(teaching.uz.clone(), theme.muted_style()))
                .alignment(Alignment::Center),
        );
    }

    let block = Block::default()
        .title(" The Rule ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_outro(frame: &mut Frame, app: &App, area: Rect, lesson_title: &str) {
    let theme = &app.theme;
    let challenges = app.session.playbook().challenge_count();
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("THE END", theme.marquee_style())).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(lesson_title.to_string(), theme.text_style()))
            .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            format!("{challenges} challenges on the reel."),
            theme.muted_style(),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Press 'r' to roll the credits again, 'm' for the scene menu, 'q' to leave.",
            theme.muted_style(),
        ))
        .alignment(Alignment::Center),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = match app.status_message() {
        Some(message) => Line::from(Span::styled(message.to_string(), theme.text_style())),
        None => {
            let hint = if app.session.current().is_challenge()
                && app.session.feedback() != Feedback::Correct
            {
                "←/→ navigate · ↑/↓ pick · Enter answer · m menu · ? help"
            } else {
                "←/→ navigate · m menu · t mode · ? help"
            };
            Line::from(Span::styled(hint, theme.muted_style()))
        }
    };
    frame.render_widget(Paragraph::new(line.alignment(Alignment::Center)), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    if app.mode == StudyMode::Live {
        frame.render_widget(CountdownWidget::new(app.live_ratio(), &app.theme), area);
    } else {
        frame.render_widget(
            ProgressWidget::new(app.session.position(), app.session.len(), &app.theme),
            area,
        );
    }
}

fn render_overlay(frame: &mut Frame, app: &App, overlay: Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
        Overlay::SceneMenu => render_scene_menu(frame, app, area),
    }
}

fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let popup = centered_rect_fixed(56, 16, area);
    frame.render_widget(Clear, popup);

    let entries = [
        ("←/h  →/l", "previous / next slide"),
        ("↑/k  ↓/j", "move the word-bank selection"),
        ("1-4", "answer with that option"),
        ("Enter", "submit the selected option"),
        ("m", "scene menu"),
        ("t", "cycle Student / Teacher / Live mode"),
        ("r", "restart the show"),
        ("?", "this help"),
        ("q", "quit"),
    ];

    let mut lines = vec![Line::default()];
    for (keys, description) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<10}"), theme.marquee_style()),
            Span::styled(description, theme.text_style()),
        ]));
    }

    let block = Block::default()
        .title(" Projection Booth ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_scene_menu(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let titles = app.session.playbook().scene_titles();
    let height = titles.len() as u16 + 4;
    let popup = centered_rect_fixed(48, height, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::default()];
    for (index, title) in titles.iter().enumerate() {
        let style = if index == app.menu_cursor {
            theme.selection_style()
        } else {
            theme.text_style()
        };
        lines.push(Line::from(Span::styled(format!("  {title}  "), style)));
    }

    let block = Block::default()
        .title(" Scene Selection ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
