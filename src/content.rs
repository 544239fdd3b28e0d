//! Static copy and decorations shown on the site.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub color: &'static str,
    pub pin_color: &'static str,
    /// Degrees.
    pub rotate: f64,
}

pub const NOTES: [Note; 5] = [
    Note {
        id: "hello",
        title: "Hello!",
        content: "I build friendly, accessible interfaces for the web.",
        color: "#FEF08A",
        pin_color: "#EF4444",
        rotate: -4.0,
    },
    Note {
        id: "focus",
        title: "Focus",
        content: "Semantic markup, responsive layouts, small details.",
        color: "#BBF7D0",
        pin_color: "#3B82F6",
        rotate: 3.0,
    },
    Note {
        id: "learning",
        title: "Learning",
        content: "React and TypeScript, one component at a time.",
        color: "#BFDBFE",
        pin_color: "#F59E0B",
        rotate: -2.0,
    },
    Note {
        id: "tools",
        title: "Tools",
        content: "Figma for sketches, Git for everything else.",
        color: "#FBCFE8",
        pin_color: "#10B981",
        rotate: 5.0,
    },
    Note {
        id: "drag",
        title: "Try me",
        content: "These notes can be dragged around the board.",
        color: "#FED7AA",
        pin_color: "#8B5CF6",
        rotate: -6.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Percent, 0..=100.
    pub level: u8,
    pub description: &'static str,
    pub color: &'static str,
    pub bg_ring: &'static str,
}

pub const SKILLS: [Skill; 5] = [
    Skill {
        name: "HTML",
        level: 85,
        description: "Semantic markup, web accessibility",
        color: "#E34F26",
        bg_ring: "#FED7AA",
    },
    Skill {
        name: "CSS",
        level: 80,
        description: "Flexbox/Grid, responsive design, animation",
        color: "#1572B6",
        bg_ring: "#BFDBFE",
    },
    Skill {
        name: "Figma",
        level: 70,
        description: "Reading design specs, exporting assets",
        color: "#A259FF",
        bg_ring: "#DDD6FE",
    },
    Skill {
        name: "JavaScript",
        level: 60,
        description: "DOM manipulation, ES6+, async code",
        color: "#F7DF1E",
        bg_ring: "#FEF3C7",
    },
    Skill {
        name: "React",
        level: 50,
        description: "Component-driven UIs, hooks",
        color: "#61DAFB",
        bg_ring: "#CFFAFE",
    },
];

/// Skill ring animation stagger per item, in milliseconds.
pub const SKILL_STAGGER_MS: u32 = 200;

/// SVG geometry for a circular progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub size: f64,
    pub stroke: f64,
}

pub const SKILL_RING: Ring = Ring {
    size: 120.0,
    stroke: 10.0,
};

impl Ring {
    pub fn radius(&self) -> f64 {
        (self.size - self.stroke) / 2.0
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    /// Dash offset that draws `level` percent of the ring; an unrevealed ring
    /// is fully hidden.
    pub fn dash_offset(&self, level: u8, revealed: bool) -> f64 {
        let circumference = self.circumference();
        if !revealed {
            return circumference;
        }
        let level = f64::from(level.min(100));
        circumference - (level / 100.0) * circumference
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        path: "/",
        label: "Home",
    },
    NavItem {
        path: "/about",
        label: "About Me",
    },
    NavItem {
        path: "/projects",
        label: "Projects",
    },
];

/// Whether `item` should be highlighted for the current `pathname`.
pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    let pathname = match pathname.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    if item.path == "/" {
        pathname == "/"
    } else {
        pathname == item.path || pathname.starts_with(&format!("{}/", item.path))
    }
}

pub const OWNER_NAME: &str = "Jiwoo Han";
pub const OWNER_TAGLINE: &str = "Front-end developer who cares about the small things";
pub const CONTACT_EMAIL: &str = "hello@jiwoo.dev";
pub const GITHUB_URL: &str = "https://github.com/jiwoo-dev";
