//! Dashboard tabs and their navigation metadata

/// One entry of the dashboard sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Overview,
    Sync,
    Web,
    Mobile,
    Ai,
    History,
    Settings,
}

impl Tab {
    /// Sidebar order
    pub const ALL: [Tab; 7] = [
        Tab::Overview,
        Tab::Sync,
        Tab::Web,
        Tab::Mobile,
        Tab::Ai,
        Tab::History,
        Tab::Settings,
    ];

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Mentee Overview",
            Tab::Sync => "Sinkronisasi Data",
            Tab::Web => "Web Development",
            Tab::Mobile => "Mobile Development",
            Tab::Ai => "AI Development",
            Tab::History => "Riwayat Kehadiran",
            Tab::Settings => "Pengaturan Akun",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Tab::Overview => "Ringkasan data kehadiran seluruh mentee di semua program",
            Tab::Sync => "Tarik data kehadiran terbaru dari Airtable ke database lokal",
            Tab::Web => "Data kehadiran mentee program Web Development & UI/UX Design",
            Tab::Mobile => {
                "Data kehadiran mentee program Mobile Development with Flutter & UI/UX Design"
            }
            Tab::Ai => "Data kehadiran mentee program AI Development",
            Tab::History => "Histori kehadiran harian mentee sepanjang bulan berjalan",
            Tab::Settings => "Kelola akun dan preferensi administrator",
        }
    }

    /// Sidebar label
    pub fn nav_label(&self) -> &'static str {
        match self {
            Tab::Overview => "All Mentee Data",
            Tab::Sync => "Sync Airtable",
            Tab::Web => "Web Development",
            Tab::Mobile => "Mobile Development",
            Tab::Ai => "AI Development",
            Tab::History => "Riwayat Kehadiran",
            Tab::Settings => "Pengaturan Akun",
        }
    }

    /// Section heading rendered above this entry, if it opens a group.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Tab::Overview => Some("Menu Utama"),
            Tab::Web => Some("Program"),
            Tab::History => Some("Utilitas"),
            _ => None,
        }
    }

    /// Program keyword the tab filters stats and data by.
    pub fn program(&self) -> Option<&'static str> {
        match self {
            Tab::Web => Some("Web"),
            Tab::Mobile => Some("Mobile"),
            Tab::Ai => Some("AI"),
            _ => None,
        }
    }

    /// Full program name shown in the tab banner.
    pub fn program_name(&self) -> Option<&'static str> {
        match self {
            Tab::Web => Some("Web Development & UI/UX Design"),
            Tab::Mobile => Some("Mobile Development with Flutter & UI/UX Design"),
            Tab::Ai => Some("AI Development"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_tabs() {
        let programs: Vec<_> = Tab::ALL.iter().filter_map(Tab::program).collect();
        assert_eq!(programs, vec!["Web", "Mobile", "AI"]);
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn test_sections_open_groups() {
        let sections: Vec<_> = Tab::ALL.iter().filter_map(Tab::section).collect();
        assert_eq!(sections, vec!["Menu Utama", "Program", "Utilitas"]);
        assert_eq!(Tab::ALL[0].section(), Some("Menu Utama"));
    }
}
