/// Built-in Portuguese word list, used when no dictionary file is configured.
pub const WORD_LIST: &[&str] = &[
    "ABACAXI", "ABELHA", "AMIGO", "AMOR", "ANEL", "ÁRVORE", "AVIÃO", "AZUL", "BALEIA", "BANANA",
    "BARCO", "BOLA", "BORBOLETA", "CADEIRA", "CAFÉ", "CAMELO", "CAMISA", "CANETA", "CASA",
    "CAVALO", "CÉU", "CHAVE", "CIDADE", "COELHO", "CORAÇÃO", "CORUJA", "ESCOLA", "ESTRELA",
    "FLORESTA", "FLOR", "FOGO", "FORMIGA", "GATO", "GIRAFA", "GUITARRA", "IGREJA", "ILHA",
    "JANELA", "JARDIM", "LARANJA", "LEÃO", "LIVRO", "LUA", "MAÇÃ", "MACACO", "MAR", "MESA",
    "MONTANHA", "MÚSICA", "NAVIO", "NUVEM", "OCEANO", "OVELHA", "PÁSSARO", "PEIXE", "PIANO",
    "PONTE", "PORTA", "PRAIA", "QUEIJO", "RATO", "RELÓGIO", "RIO", "SAPATO", "SOL", "SORRISO",
    "TARTARUGA", "TIGRE", "TOMATE", "TREM", "UVA", "VACA", "VENTO", "VERÃO", "VIOLÃO", "ZEBRA",
];
