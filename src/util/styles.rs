//! Stylesheet injected into `<head>` at startup.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// Id of the injected `<style>` element; a second bootstrap finds it and skips.
pub const STYLE_ELEMENT_ID: &str = "portfolio-dynamic-styles";

/// Keyframes and hover rules the page markup does not ship.
pub const DYNAMIC_STYLES: &str = r"
@keyframes fadeInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

@keyframes pulse {
    0%, 100% {
        transform: scale(1);
    }
    50% {
        transform: scale(1.05);
    }
}

.profile-image-container:hover {
    animation: pulse 2s infinite;
}

.nav-link {
    position: relative;
    overflow: hidden;
}

.nav-link::after {
    content: '';
    position: absolute;
    top: 0;
    left: -100%;
    width: 100%;
    height: 100%;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
    transition: left 0.6s;
}

.nav-link:hover::after {
    left: 100%;
}
";
