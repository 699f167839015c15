use ashyus_common::Book;
use chrono::Utc;

/// Books shown when no remote store is configured, so the site never renders empty.
pub fn initial_books() -> Vec<Book> {
    let now = Utc::now();
    vec![
        Book {
            id: "static-1".to_string(),
            title: "Entre a Razão E a Runa".to_string(),
            books2read_url: "https://amazon.com.br".to_string(),
            amazon_url: Some(
                "https://www.amazon.com.br/s?k=Entre+a+Raz%C3%A3o+E+a+Runa+Ashyus".to_string(),
            ),
            amazon_ebook_url: None,
            draft_book_url: None,
            cover_url: "https://placehold.co/800x1200/1e293b/fbbf24?text=Entre+a+Raz%C3%A3o+E+a+Runa"
                .to_string(),
            short_synopsis: "Quando o lógico enfrenta o místico, sacrificar a mente pode ser o \
                             único caminho para salvar a alma."
                .to_string(),
            full_synopsis: "Em um mundo onde a magia é uma ciência esquecida, \"Entre a Razão E a \
                            Runa\" explora o conflito devastador entre o intelecto e o \
                            inexplicável. O protagonista, um erudito cético, vê suas convicções \
                            desmoronarem ao encontrar uma runa antiga que desafia todas as leis \
                            da física.\n\nPerseguido por sombras que não deveriam existir e \
                            tentado por um poder que promete reescrever a realidade, ele deve \
                            escolher: manter sua sanidade intacta ou mergulhar na loucura para \
                            impedir uma catástrofe dimensional."
                .to_string(),
            first_chapter_markdown: "## Capítulo 1: O Sussurro da Pedra\n\nA chuva batia contra \
                                     a janela como dedos esqueléticos pedindo abrigo. Ele \
                                     ignorou, focado na peça de obsidiana sobre sua mesa. Não \
                                     era apenas uma pedra; era um grito silencioso.\n\n— *Você \
                                     não deveria estar olhando para isso* — uma voz ecoou, não \
                                     na sala, mas dentro de seu crânio."
                .to_string(),
            created_at: now,
        },
        Book {
            id: "static-2".to_string(),
            title: "Doce Reencontro em Sintra".to_string(),
            books2read_url: "https://amazon.com.br".to_string(),
            amazon_url: Some(
                "https://www.amazon.com.br/s?k=Doce+Reencontro+em+Sintra+Ashyus".to_string(),
            ),
            amazon_ebook_url: None,
            draft_book_url: None,
            cover_url: "https://placehold.co/800x1200/1e293b/fbbf24?text=Doce+Reencontro"
                .to_string(),
            short_synopsis: "Nas brumas de Sintra, um amor antigo ressurge entre palácios e \
                             segredos que o tempo não conseguiu apagar."
                .to_string(),
            full_synopsis: "Sintra, Portugal. Uma vila envolta em neblina e mistério, onde cada \
                            palácio esconde uma lenda. É aqui que o destino decide entrelaçar \
                            novamente dois caminhos separados há décadas.\n\nEntre taças de \
                            vinho e os ecos do passado, segredos sombrios vêm à tona, ameaçando \
                            transformar esse doce reencontro em uma despedida amarga."
                .to_string(),
            first_chapter_markdown: "## Prólogo\n\nA neblina de Sintra tem um cheiro peculiar: \
                                     cheira a musgo, terra molhada e memórias antigas.\n\n— Você \
                                     voltou — ele disse, a voz rouca como o vento na serra.\n\n— \
                                     Eu nunca parti de verdade."
                .to_string(),
            created_at: now,
        },
    ]
}
