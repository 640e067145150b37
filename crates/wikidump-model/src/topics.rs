/// Language used when neither the CLI nor the config file names one.
pub const DEFAULT_LANGUAGE: &str = "es";

/// Directory that receives one text file per fetched article.
pub const DEFAULT_OUTPUT_DIR: &str = "docs_es";

/// Built-in topic list (Spanish Wikipedia titles), in output order.
pub const DEFAULT_TOPICS: &[&str] = &[
    "Inteligencia artificial",
    "Ciencia de datos",
    "Historia de Perú",
    "Arequipa",
    "Machu Picchu",
    "Isaac Newton",
    "Albert Einstein",
    "Literatura española",
    "Pedro Castillo",
    "Universidad Nacional de San Agustín",
    "Geometría",
    "Física cuántica",
    "Química",
    "Lengua española",
    "Matemáticas",
    "Lógica matemática",
    "Cultura Inca",
    "Amazonas",
    "Pablo Neruda",
    "Gabriel García Márquez",
    "Teoría de la relatividad",
    "Economía",
    "Sociología",
    "Psicología",
    "Software libre",
    "GNU/Linux",
    "Python",
    "C++",
    "Bases de datos",
    "Árbol AVL",
    "Índice invertido",
    "Google",
    "Historia de Internet",
    "Ciberseguridad",
    "Criptografía",
    "Blockchain",
    "Inteligencia emocional",
    "Educación en Perú",
    "Literatura latinoamericana",
    "Mario Vargas Llosa",
    "Astronomía",
    "Astrofísica",
    "Planetas",
    "Energía solar",
    "Cambio climático",
    "Nanotecnología",
    "Biotecnología",
    "Tsunami",
    "Terremoto",
    "Volcán Misti",
    "Fenómeno El Niño",
    "Virreinato del Perú",
    "Simón Bolívar",
    "José de San Martín",
    "Independencia del Perú",
    "Túpac Amaru II",
    "Revolución Industrial",
    "Segunda Guerra Mundial",
    "Imperio Romano",
    "Imperio Inca",
    "Cuzco",
    "Trujillo",
    "Amazonía peruana",
    "Lago Titicaca",
    "Costa del Perú",
    "Democracia",
    "Dictadura",
    "Gobierno del Perú",
    "Congreso del Perú",
    "Constitución del Perú",
    "Derechos Humanos",
    "Naciones Unidas",
    "IA generativa",
    "Aprendizaje automático",
    "Red neuronal artificial",
    "Algoritmos",
    "Big Data",
    "Cómputo cuántico",
    "Redes sociales",
    "WhatsApp",
    "TikTok",
    "Facebook",
    "Google Translate",
    "Buscadores web",
    "Videojuegos",
    "Industria musical",
    "Cine peruano",
    "Festival de Cannes",
    "Premios Nobel",
    "Wikipedia",
    "OpenAI",
    "ChatGPT",
    "Tecnología educativa",
    "Innovación tecnológica",
    "Startups en Perú",
    "Historia de Arequipa",
    "Puente Chilina",
    "Yanahuara",
    "Cañón del Colca",
    "Mistura",
    "RPP Noticias",
];

pub fn default_topics() -> Vec<String> {
    DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
}

/// Parse a topic list file: one title per line.
///
/// Surrounding whitespace is trimmed; blank lines and lines starting with
/// `#` are skipped. Order is preserved and duplicates are kept.
pub fn parse_topic_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
