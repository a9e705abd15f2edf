#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderMode {
    Live,
    Preview,
    Passthrough,
}

impl RenderMode {
    // Live wins for interactive non-editor views; an editor view only
    // traces when explicitly opted in, and then never accumulates.
    pub fn classify(is_interactive: bool, is_editor_view: bool, trace_in_editor: bool) -> Self {
        if is_interactive && !is_editor_view {
            RenderMode::Live
        } else if !is_editor_view || trace_in_editor {
            RenderMode::Preview
        } else {
            RenderMode::Passthrough
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_main_view_is_live() {
        assert_eq!(RenderMode::classify(true, false, false), RenderMode::Live);
        assert_eq!(RenderMode::classify(true, false, true), RenderMode::Live);
    }

    #[test]
    fn non_interactive_main_view_previews() {
        assert_eq!(RenderMode::classify(false, false, false), RenderMode::Preview);
        assert_eq!(RenderMode::classify(false, false, true), RenderMode::Preview);
    }

    #[test]
    fn editor_view_traces_only_when_opted_in() {
        assert_eq!(RenderMode::classify(true, true, true), RenderMode::Preview);
        assert_eq!(RenderMode::classify(false, true, true), RenderMode::Preview);
        assert_eq!(RenderMode::classify(true, true, false), RenderMode::Passthrough);
        assert_eq!(RenderMode::classify(false, true, false), RenderMode::Passthrough);
    }
}
