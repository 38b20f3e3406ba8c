use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Ru (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Ru,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.open" => if ru { "Открыть сцену..." } else { "Open Scene..." },
        "menu.open_title" => if ru { "Открыть JSON сцены" } else { "Open Scene JSON" },
        "menu.save" => if ru { "Сохранить сцену..." } else { "Save Scene..." },
        "menu.save_title" => if ru { "Сохранить JSON сцены" } else { "Save Scene JSON" },
        "menu.reset_defaults" => if ru { "Сбросить к умолчаниям" } else { "Reset to defaults" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.properties" => if ru { "Свойства" } else { "Properties" },
        "menu.reset_camera" => if ru { "Сбросить камеру" } else { "Reset camera" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.visible" => if ru { "Показывать" } else { "Visible" },
        "settings.cell_size" => if ru { "Шаг ячейки" } else { "Cell size" },
        "settings.range" => if ru { "Диапазон" } else { "Range" },
        "settings.opacity" => if ru { "Прозрачность" } else { "Opacity" },
        "settings.axes" => if ru { "Оси" } else { "Axes" },
        "settings.length" => if ru { "Длина" } else { "Length" },
        "settings.thickness" => if ru { "Толщина" } else { "Thickness" },
        "settings.labels" => if ru { "Подписи осей" } else { "Axis labels" },
        "settings.background" => if ru { "Фон" } else { "Background" },
        "settings.antialiasing" => if ru { "Сглаживание (перезапуск)" } else { "Anti-aliasing (restart)" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },

        // ── Properties panel ────────────────────────────────
        "prop.title" => if ru { "Свойства" } else { "Properties" },
        "prop.colors" => if ru { "Цвета" } else { "Colors" },
        "prop.sizes" => if ru { "Размеры" } else { "Sizes" },
        "prop.positions" => if ru { "Позиции" } else { "Positions" },
        "prop.line" => if ru { "Линия" } else { "Line" },
        "prop.point" => if ru { "Точка" } else { "Point" },
        "prop.projections" => if ru { "Проекции" } else { "Projections" },
        "prop.radius" => if ru { "Радиус" } else { "Radius" },
        "prop.thickness" => if ru { "Толщина" } else { "Thickness" },
        "prop.angles" => if ru { "Углы" } else { "Angles" },
        "prop.angle" => if ru { "Наклон" } else { "Inclination" },
        "prop.azimuth" => if ru { "Азимут" } else { "Azimuth" },
        "prop.distance" => if ru { "Расстояние" } else { "Distance" },
        "prop.reset" => if ru { "Сбросить к умолчаниям" } else { "Reset to defaults" },

        // ── Status bar and overlays ─────────────────────────
        "status.ready" => if ru { "Готово" } else { "Ready" },
        "status.selected" => if ru { "Выбрано" } else { "Selected" },
        "status.angle" => if ru { "Наклон" } else { "Angle" },
        "status.azimuth" => if ru { "Азимут" } else { "Azimuth" },
        "status.nav_hint" => {
            if ru {
                "ЛКМ — выбрать точку · Alt+ЛКМ/СКМ — вращение · ПКМ — панорама · колесо — масштаб"
            } else {
                "LMB pick point · Alt+LMB/MMB orbit · RMB pan · wheel zoom"
            }
        }
        "overlay.angle" => if ru { "Наклон" } else { "Angle" },
        "overlay.azimuth" => if ru { "Азимут" } else { "Azimuth" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
