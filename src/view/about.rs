//! About section: biography with tech stack, startup blurb, experience accordion.

use super::constants::TAB_BAR_HEIGHT;
use super::helpers::empty_line;
use super::styles::Palette;
use crate::adapter::tech_color;
use crate::model::{Profile, TechStack};
use crate::state::{AboutTab, AppState, ExperienceList, TabSet, TechCategory};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

/// Draw the about section into `area`.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let [tabs_area, body_area] =
        Layout::vertical([Constraint::Length(TAB_BAR_HEIGHT), Constraint::Min(0)]).areas(area);

    let tabs = Tabs::new(AboutTab::ALL.iter().map(|tab| tab.label()))
        .block(Block::bordered())
        .select(state.about_tab.index())
        .highlight_style(palette.selected())
        .divider("│");
    frame.render_widget(tabs, tabs_area);

    let profile = state.profile();
    match state.about_tab {
        AboutTab::About => render_about(frame, body_area, profile, state.tech_category, palette),
        AboutTab::Startup => render_startup(frame, body_area, profile, palette),
        AboutTab::Experience => {
            render_experience(frame, body_area, profile, &state.experiences, palette)
        }
    }
}

fn category_items(stack: &TechStack, category: TechCategory) -> &[String] {
    match category {
        TechCategory::Languages => &stack.languages,
        TechCategory::Frameworks => &stack.frameworks,
        TechCategory::Databases => &stack.databases,
        TechCategory::Tools => &stack.tools,
    }
}

/// Coloured tag chips separated by a space.
pub fn badge_line(names: &[String], palette: Palette) -> Line<'static> {
    let spans: Vec<Span> = names
        .iter()
        .flat_map(|name| {
            [
                Span::styled(format!(" {name} "), palette.badge(tech_color(name))),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_about(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    category: TechCategory,
    palette: Palette,
) {
    let [bio_area, stack_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(7)]).areas(area);

    let mut bio: Vec<Line> = Vec::new();
    for paragraph in &profile.about {
        bio.push(Line::from(paragraph.clone()));
        bio.push(empty_line());
    }
    frame.render_widget(
        Paragraph::new(bio)
            .block(Block::bordered().title(" About Me "))
            .wrap(Wrap { trim: true }),
        bio_area,
    );

    let block = Block::bordered().title(" Tech Stack ");
    let inner = block.inner(stack_area);
    frame.render_widget(block, stack_area);

    let [category_area, badges_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    let categories = Tabs::new(TechCategory::ALL.iter().map(|c| c.label()))
        .select(category.index())
        .highlight_style(palette.selected())
        .divider("·");
    frame.render_widget(categories, category_area);

    let items = category_items(&profile.tech_stack, category);
    let badges = if items.is_empty() {
        Paragraph::new(Line::styled("Nothing listed yet", palette.muted()))
    } else {
        Paragraph::new(vec![empty_line(), badge_line(items, palette)]).wrap(Wrap { trim: false })
    };
    frame.render_widget(badges, badges_area);
}

fn render_startup(frame: &mut Frame, area: Rect, profile: &Profile, palette: Palette) {
    let startup = &profile.startup;
    let [text_area, progress_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    let mut lines = vec![
        Line::styled(startup.tagline.clone(), palette.accent()),
        empty_line(),
    ];
    for paragraph in &startup.paragraphs {
        lines.push(Line::from(paragraph.clone()));
        lines.push(empty_line());
    }
    if !startup.stack.is_empty() {
        lines.push(Line::styled("Built with", palette.key()));
        lines.push(badge_line(&startup.stack, palette));
        lines.push(empty_line());
    }
    if !startup.learnings.is_empty() {
        lines.push(Line::styled("What I've learned", palette.key()));
        for learning in &startup.learnings {
            lines.push(Line::from(format!("  • {learning}")));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::bordered().title(Span::styled(
                format!(" {} ", startup.name),
                palette.title(),
            )))
            .wrap(Wrap { trim: true }),
        text_area,
    );

    let gauge = Gauge::default()
        .block(Block::bordered().title(" Progress "))
        .gauge_style(palette.accent())
        .percent(u16::from(startup.progress.min(100)));
    frame.render_widget(gauge, progress_area);
}

/// Accordion lines plus the index of the cursor's header line.
fn experience_lines(
    profile: &Profile,
    list: &ExperienceList,
    palette: Palette,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut cursor_line = 0;

    for (i, experience) in profile.experiences.iter().enumerate() {
        let expanded = list.accordion().is_expanded(&experience.id);
        let marker = if expanded { "▾" } else { "▸" };
        let header = format!(
            "{marker} {} · {}  ({})",
            experience.role, experience.company, experience.period
        );
        if i == list.cursor() {
            cursor_line = lines.len();
            lines.push(Line::styled(header, palette.selected()));
        } else {
            lines.push(Line::styled(header, palette.title()));
        }

        if expanded {
            lines.push(Line::from(format!("    {}", experience.description)));
            if !experience.responsibilities.is_empty() {
                lines.push(Line::styled("    Responsibilities", palette.key()));
                for item in &experience.responsibilities {
                    lines.push(Line::from(format!("      • {item}")));
                }
            }
            if !experience.transferable_skills.is_empty() {
                lines.push(Line::styled("    Transferable skills", palette.key()));
                lines.push(Line::styled(
                    format!("      {}", experience.transferable_skills.join(" · ")),
                    palette.accent(),
                ));
            }
        }
        lines.push(empty_line());
    }

    (lines, cursor_line)
}

fn render_experience(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    list: &ExperienceList,
    palette: Palette,
) {
    let block = Block::bordered().title(" Experience ");
    if profile.experiences.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("No experience listed", palette.muted())).block(block),
            area,
        );
        return;
    }

    let (lines, cursor_line) = experience_lines(profile, list, palette);
    // Keep the cursor header on screen.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(visible.saturating_sub(1)) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}
