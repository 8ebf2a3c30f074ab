//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Toast};
use crate::models::Feedback;
use components::{render_button, render_dialog_framework};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(7),    // 题目
            Constraint::Length(3), // 按钮
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_question(frame, app, chunks[1]);
    render_buttons(frame, chunks[2]);
    render_help(frame, chunks[3]);

    if let Some(toast) = &app.toast {
        render_toast(frame, toast);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(format!("❓ 判断题  {}", app.position_label()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_question(frame: &mut Frame, app: &App, area: Rect) {
    let question = Paragraph::new(app.quiz.current_prompt().as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("题目").borders(Borders::ALL));
    frame.render_widget(question, area);
}

fn render_buttons(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_button(frame, chunks[0], "对", "t", Color::Green);
    render_button(frame, chunks[1], "错", "f", Color::Red);
    render_button(frame, chunks[2], "下一题", "n", Color::Yellow);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("[t/←] 对  [f/→] 错  [n/Enter] 下一题  [q] 退出")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_toast(frame: &mut Frame, toast: &Toast) {
    let area = centered_rect(40, 20, frame.area());
    let color = match toast.feedback {
        Feedback::Correct => Color::Green,
        Feedback::Incorrect => Color::Red,
    };
    let inner = render_dialog_framework(frame, area, "提示", color);

    let message = Paragraph::new(toast.message())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    frame.render_widget(message, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuizState};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    /// 渲染后的屏幕文本（去掉空格，宽字符后的占位格也是空格）
    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
            .replace(' ', "")
    }

    fn app() -> App {
        let quiz = QuizState::new(vec![
            Question::new("Is the sky blue?", true),
            Question::new("Is 2+2=5?", false),
        ])
        .unwrap();
        App::new(quiz, "test".to_string())
    }

    #[test]
    fn test_render_current_prompt() {
        let mut app = app();
        assert!(screen(&app).contains("Istheskyblue?"));

        app.dispatch(Action::Next);
        let text = screen(&app);
        assert!(text.contains("Is2+2=5?"));
        assert!(!text.contains("Istheskyblue?"));
    }

    #[test]
    fn test_render_toast() {
        let mut app = app();
        assert!(!screen(&app).contains("提示"));

        app.dispatch(Action::Answer(true));
        assert!(screen(&app).contains("提示"));
    }
}
