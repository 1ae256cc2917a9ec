//! Fixed reference tables: the states covered by the surveys, the
//! municipalities of each state and the known research institutes.

/// State codes in display order.
const STATES: &[(&str, &[&str])] = &[
    ("MA", MARANHAO),
    ("PI", PIAUI),
    ("BA", BAHIA),
    ("CE", CEARA),
];

const INSTITUTES: &[&str] = &["Piauí Vox", "Estimativa", "Portal R10"];

/// All state codes, in display order.
pub fn states() -> impl Iterator<Item = &'static str> {
    STATES.iter().map(|(code, _)| *code)
}

/// Municipalities of `state`. Unknown states have no cities.
#[must_use]
pub fn cities(state: &str) -> &'static [&'static str] {
    STATES
        .iter()
        .find(|(code, _)| *code == state)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

#[must_use]
pub fn is_known_state(state: &str) -> bool {
    STATES.iter().any(|(code, _)| *code == state)
}

/// Returns `true` when `city` belongs to the city list of `state`.
#[must_use]
pub fn contains_city(state: &str, city: &str) -> bool {
    cities(state).contains(&city)
}

/// Research institutes offered by the entry form.
#[must_use]
pub fn institutes() -> &'static [&'static str] {
    INSTITUTES
}

#[must_use]
pub fn is_known_institute(name: &str) -> bool {
    INSTITUTES.contains(&name)
}

const MARANHAO: &[&str] = &[
    "Açailândia", "Afonso Cunha", "Água Doce do Maranhão", "Alcântara", "Aldeias Altas",
    "Altamira do Maranhão", "Alto Alegre do Maranhão", "Alto Alegre do Pindaré", "Alto Parnaíba",
    "Amapá do Maranhão", "Amarante do Maranhão", "Anajatuba", "Anapurus", "Apicum-Açu", "Araguanã",
    "Araioses", "Arame", "Arari", "Axixá", "Bacabal", "Bacabeira", "Bacuri", "Bacurituba",
    "Balsas", "Barão de Grajaú", "Barra do Corda", "Barreirinhas", "Bela Vista do Maranhão",
    "Belágua", "Benedito Leite", "Bequimão", "Bernardo do Mearim", "Boa Vista do Gurupi",
    "Bom Jardim", "Bom Jesus das Selvas", "Bom Lugar", "Brejo", "Brejo de Areia", "Buriti",
    "Buriti Bravo", "Buriticupu", "Buritirana", "Cachoeira Grande", "Cajapió", "Cajari",
    "Campestre do Maranhão", "Cândido Mendes", "Cantanhede", "Capinzal do Norte", "Carolina",
    "Carutapera", "Caxias", "Cedral", "Central do Maranhão", "Centro do Guilherme",
    "Centro Novo do Maranhão", "Chapadinha", "Cidelândia", "Codó", "Coelho Neto", "Colinas",
    "Conceição do Lago‑Açu", "Coroatá", "Cururupu", "Davinópolis", "Dom Pedro", "Duque Bacelar",
    "Esperantinópolis", "Estreito", "Feira Nova do Maranhão", "Fernando Falcão",
    "Formosa da Serra Negra", "Fortaleza dos Nogueiras", "Fortuna", "Godofredo Viana",
    "Gonçalves Dias", "Governador Archer", "Governador Edison Lobão", "Governador Eugênio Barros",
    "Governador Luiz Rocha", "Governador Newton Bello", "Governador Nunes Freire", "Graça Aranha",
    "Grajaú", "Guimarães", "Humberto de Campos", "Icatu", "Igarapé do Meio", "Igarapé Grande",
    "Imperatriz", "Itaipava do Grajaú", "Itapecuru‑Mirim", "Itinga do Maranhão", "Jatobá",
    "Jenipapo dos Vieiras", "João Lisboa", "Joselândia", "Junco do Maranhão", "Lago da Pedra",
    "Lago do Junco", "Lago dos Rodrigues", "Lago Verde", "Lagoa do Mato",
    "Lagoa Grande do Maranhão", "Lajeado Novo", "Lima Campos", "Loreto", "Luís Domingues",
    "Magalhães de Almeida", "Maracaçumé", "Marajá do Sena", "Maranhãozinho", "Mata Roma",
    "Matinha", "Matões", "Matões do Norte", "Milagres do Maranhão", "Mirador", "Miranda do Norte",
    "Mirinzal", "Monção", "Montes Altos", "Morros", "Nina Rodrigues", "Nova Colinas",
    "Nova Iorque", "Nova Olinda do Maranhão", "Olho d'Água das Cunhãs", "Olinda Nova do Maranhão",
    "Paço do Lumiar", "Palmeirândia", "Paraibano", "Parnarama", "Passagem Franca", "Pastos Bons",
    "Paulino Neves", "Paulo Ramos", "Pedreiras", "Pedro do Rosário", "Penalva", "Peri Mirim",
    "Peritoró", "Pindaré‑Mirim", "Pinheiro", "Pio XII", "Pirapemas", "Poção de Pedras",
    "Porto Franco", "Porto Rico do Maranhão", "Presidente Dutra", "Presidente Juscelino",
    "Presidente Médici", "Presidente Sarney", "Presidente Vargas", "Primeira Cruz", "Raposa",
    "Riachão", "Ribamar Fiquene", "Rosário", "Sambaíba", "Santa Filomena do Maranhão",
    "Santa Helena", "Santa Inês", "Santa Luzia", "Santa Luzia do Paruá",
    "Santa Quitéria do Maranhão", "Santa Rita", "Santana do Maranhão", "Santo Amaro do Maranhão",
    "Santo Antônio dos Lopes", "São Benedito do Rio Preto", "São Bento", "São Bernardo",
    "São Domingos do Azeitão", "São Domingos do Maranhão", "São Félix de Balsas",
    "São Francisco do Brejão", "São Francisco do Maranhão", "São João Batista", "São João do Caru",
    "São João do Paraíso", "São João do Soter", "São João dos Patos", "São José de Ribamar",
    "São José dos Basílios", "São Luís", "São Luís Gonzaga do Maranhão", "São Mateus do Maranhão",
    "São Pedro da Água Branca", "São Pedro dos Crentes", "São Raimundo das Mangabeiras",
    "São Raimundo do Doca Bezerra", "São Roberto", "São Vicente Ferrer", "Satubinha",
    "Senador Alexandre Costa", "Senador La Rocque", "Serrano do Maranhão", "Sítio Novo",
    "Sucupira do Norte", "Sucupira do Riachão", "Tasso Fragoso", "Timbiras", "Timon",
    "Trizidela do Vale", "Tufilândia", "Tuntum", "Turiaçu", "Turilândia", "Tutóia",
    "Urbano Santos", "Vargem Grande", "Viana", "Vila Nova dos Martírios", "Vitória do Mearim",
    "Vitorino Freire", "Zé Doca",
];

const PIAUI: &[&str] = &[
    "Acauã", "Agricolândia", "Água Branca", "Alagoinha do Piauí", "Alegrete do Piauí",
    "Alto Longá", "Altos", "Alvorada do Gurgueia", "Amarante", "Angical do Piauí",
    "Anísio de Abreu", "Antônio Almeida", "Aroazes", "Aroeiras do Itaim", "Arraial",
    "Assunção do Piauí", "Avelino Lopes", "Baixa Grande do Ribeiro", "Barra d'Alcântara", "Barras",
    "Barreiras do Piauí", "Barro Duro", "Batalha", "Bela Vista do Piauí", "Belém do Piauí",
    "Beneditinos", "Bertolínia", "Betânia do Piauí", "Boa Hora", "Bocaina", "Bom Jesus",
    "Bom Princípio do Piauí", "Bonfim do Piauí", "Boqueirão do Piauí", "Brasileira",
    "Brejo do Piauí", "Buriti dos Lopes", "Buriti dos Montes", "Cabeceiras do Piauí",
    "Cajazeiras do Piauí", "Cajueiro da Praia", "Caldeirão Grande do Piauí", "Campinas do Piauí",
    "Campo Alegre do Fidalgo", "Campo Grande do Piauí", "Campo Largo do Piauí", "Campo Maior",
    "Canavieira", "Canto do Buriti", "Capitão de Campos", "Capitão Gervásio Oliveira", "Caracol",
    "Caraúbas do Piauí", "Caridade do Piauí", "Castelo do Piauí", "Caxingó", "Cocal",
    "Cocal de Telha", "Cocal dos Alves", "Coivaras", "Colônia do Gurgueia", "Colônia do Piauí",
    "Conceição do Canindé", "Coronel José Dias", "Corrente", "Cristalândia do Piauí",
    "Cristino Castro", "Curimatá", "Currais", "Curral Novo do Piauí", "Curralinhos",
    "Demerval Lobão", "Dirceu Arcoverde", "Dom Expedito Lopes", "Dom Inocêncio", "Domingos Mourão",
    "Elesbão Veloso", "Eliseu Martins", "Esperantina", "Fartura do Piauí", "Flores do Piauí",
    "Floriano", "Fronteiras", "Geminiano", "Gilbués", "Guadalupe", "Hugo Napoleão", "Inhuma",
    "Ipiranga do Piauí", "Isaías Coelho", "Itainópolis", "Itaueira", "Jacobina do Piauí",
    "João Costa", "Jatobá do Piauí", "Jerumenha", "José de Freitas", "Juazeiro do Piauí",
    "Júlio Borges", "Lagoa Alegre", "Lagoa de São Francisco", "Lagoa do Piauí", "Lagoa do Sítio",
    "Landri Sales", "Luís Correia", "Luzilândia", "Luís Antônio", "Madeiro", "Marcolândia",
    "Massapê do Piauí", "Miguel Alves", "Miguel Leão", "Milton Brandão", "Monsenhor Gil",
    "Monsenhor Hipólito", "Monte Alegre do Piauí", "Morro Cabeça no Tempo", "Murici dos Portelas",
    "Nazária", "Nossa Senhora de Nazaré", "Nossa Senhora dos Remédios", "Novo Oriente do Piauí",
    "Novo Santo Antônio", "Oeiras", "Olho d'Água do Piauí", "Padilha", "Paquetá", "Pajeú do Piauí",
    "Palmeira do Piauí", "Palmeirais", "Parnaíba", "Passagem Franca do Piauí", "Patos do Piauí",
    "Pau d'Arco do Piauí", "Paulistana", "Picos", "Pimenteiras", "Pio IX", "Piracuruca",
    "Piripiri", "Porto", "Prata do Piauí", "Queimada Nova", "Redenção do Gurguéia", "Regeneração",
    "Riacho Frio", "Ribeira do Piauí", "Ribeiro Gonçalves", "Rio Grande do Piauí",
    "Santa Cruz do Piauí", "Santa Cruz dos Milagres", "Santa Filomena", "Santa Luz",
    "Santa Rosa do Piauí", "Santo Antônio de Lisboa", "Santo Antônio dos Milagres",
    "Santo Inácio do Piauí", "São Braz do Piauí", "São Félix do Piauí",
    "São Francisco de Assis do Piauí", "São Francisco do Piauí", "São Gonçalo do Gurguéia",
    "São Gonçalo do Piauí", "São João da Canabrava", "São João da Fronteira", "São João da Serra",
    "São João da Varjota", "São João do Arraial", "São João do Piauí", "São José do Divino",
    "São José do Peixe", "São José do Piauí", "São Julião", "São Lourenço do Piauí",
    "São Miguel da Baixa Grande", "São Miguel de São Lourenço", "São Miguel do Fidalgo",
    "São Miguel do Tapuio", "São Pedro do Piauí", "São Raimundo Nonato", "Sebastião Barros",
    "Sebastião Leal", "Sigefredo Pacheco", "Simões", "Simplício Mendes", "Socorro do Piauí",
    "Sussuapara", "Tamboril do Piauí", "Tanque do Piauí", "Teresina", "União", "Uruçuí",
    "Valença do Piauí", "Várzea Branca", "Várzea Grande", "Vera Mendes", "Vila Nova do Piauí",
    "Wall Ferraz", "Jaicós",
];

const BAHIA: &[&str] = &[
    "Abaíra", "Abaré", "Acajutiba", "Adustina", "Água Fria", "Aiquara", "Alagoinhas", "Alcobaça",
    "Almadina", "Amargosa", "Amélia Rodrigues", "América Dourada", "Anagé", "Andaraí", "Andorinha",
    "Angical", "Anguera", "Antas", "Antônio Cardoso", "Antônio Gonçalves", "Aporá", "Apuarema",
    "Araçás", "Aracatu", "Araci", "Aramari", "Arataca", "Aratuípe", "Aurelino Leal", "Baianópolis",
    "Baixa Grande", "Banzaê", "Barra", "Barra da Estiva", "Barra do Choça", "Barra do Mendes",
    "Barra do Rocha", "Barreiras", "Barro Alto", "Barro Preto", "Barrocas", "Belmonte",
    "Belo Campo", "Biritinga", "Boa Nova", "Boa Vista do Tupim", "Bom Jesus da Lapa",
    "Bom Jesus da Serra", "Boninal", "Bonito", "Boquira", "Botuporã", "Brejões", "Brejolândia",
    "Brotas de Macaúbas", "Brumado", "Buerarema", "Buritirama", "Caatiba",
    "Cabaceiras do Paraguaçu", "Cachoeira", "Caculé", "Caém", "Caetanos", "Caetité", "Cafarnaum",
    "Cairu", "Caldeirão Grande", "Camacan", "Camaçari", "Camamu", "Campo Alegre de Lourdes",
    "Campo Formoso", "Canápolis", "Canarana", "Canavieiras", "Candeal", "Candeias", "Candiba",
    "Cândido Sales", "Cansanção", "Canudos", "Capela do Alto Alegre", "Capim Grosso", "Caraíbas",
    "Caravelas", "Cardeal da Silva", "Carinhanha", "Casa Nova", "Castro Alves", "Catolândia",
    "Catu", "Caturama", "Central", "Chorrochó", "Cícero Dantas", "Cipó", "Coaraci", "Cocos",
    "Conceição da Feira", "Conceição do Almeida", "Conceição do Coité", "Conceição do Jacuípe",
    "Conde", "Condeúba", "Contendas do Sincorá", "Coração de Maria", "Cordeiros", "Coribe",
    "Coronel João Sá", "Correntina", "Cotegipe", "Cravolândia", "Crisópolis", "Cristópolis",
    "Cruz das Almas", "Dário Meira", "Dias d'Ávila", "Dom Basílio", "Dom Macedo Costa",
    "Elísio Medrado", "Encruzilhada", "Entre Rios", "Érico Cardoso", "Esplanada",
    "Euclides da Cunha", "Eunápolis", "Fátima", "Feira da Mata", "Feira de Santana", "Filadélfia",
    "Firmino Alves", "Floresta Azul", "Formosa do Rio Preto", "Gandu", "Gavião", "Gentio do Ouro",
    "Glória", "Gongogi", "Governador Mangabeira", "Guajeru", "Guanambi", "Guaratinga",
    "Heliópolis", "Iaçu", "Ibiassucê", "Ibicaraí", "Ibicoara", "Ibicuí", "Ibipeba", "Ibipitanga",
    "Ibiquera", "Ibirapitanga", "Ibirapuã", "Ibirataia", "Ibitiara", "Ibititá", "Ibotirama",
    "Ichu", "Igaporã", "Igrapiúna", "Iguai", "Ilhéus", "Inhambupe", "Ipecaetá", "Ipiau", "Ipirá",
    "Irajuba", "Iramaia", "Iraquara", "Irará", "Irecê", "Itabela", "Itaberaba", "Itabuna",
    "Itacaré", "Itaeté", "Itagi", "Itagibá", "Itagimirim", "Itaguaçu da Bahia", "Itaju do Colônia",
    "Itajuípe", "Itamaraju", "Itamari", "Itambé", "Itanagra", "Itanhém", "Itaparica", "Itapé",
    "Itapebi", "Itapetinga", "Itapicuru", "Itapitanga", "Itaquara", "Itarantim", "Itatim",
    "Itiruçu", "Itororó", "Ituaçu", "Ituberá", "Iuiú", "Jaborandi", "Jacaraci", "Jacobina",
    "Jaguaquara", "Jaguarari", "Jaguaripe", "Jandaíra", "Jequié", "Jeremoabo", "Jiquiriçá",
    "Jitaúna", "João Dourado", "Juazeiro", "Jucuruçu", "Jussara", "Jussari", "Jussiape",
    "Lafaiete Coutinho", "Lagoa Real", "Laje", "Lajedão", "Lajedinho", "Lajedo do Tabocal",
    "Lamarão", "Lapão", "Lauro de Freitas", "Lençóis", "Licínio de Almeida",
    "Livramento de Nossa Senhora", "Luís Eduardo Magalhães", "Macajuba", "Macarani", "Macaúbas",
    "Macururé", "Madre de Deus", "Maetinga", "Maiquinique", "Mairi", "Malhada",
    "Malhada de Pedras", "Manoel Vitorino", "Mansidão", "Maracás", "Maragogipe", "Maraú",
    "Marcionílio Souza", "Mascote", "Mata de São João", "Matina", "Medeiros Neto", "Miguel Calmon",
    "Milagres", "Mirangaba", "Mirante", "Monte Santo", "Morpará", "Morro do Chapéu", "Mortugaba",
    "Mucugê", "Mundo Novo", "Muniz Ferreira", "Muquém de São Francisco", "Muritiba", "Mutuípe",
    "Nazaré", "Nilo Peçanha", "Nordestina", "Nova Canaã", "Nova Fátima", "Nova Ibiá",
    "Nova Itarana", "Nova Redenção", "Nova Soure", "Nova Viçosa", "Novo Horizonte", "Novo Triunfo",
    "Olindina", "Oliveira dos Brejinhos", "Ouriçangas", "Ourolândia", "Palmas de Monte Alto",
    "Palmeiras", "Palmira", "Paramirim", "Paratinga", "Paripiranga", "Pau Brasil", "Paulo Afonso",
    "Pé de Serra", "Pedro Alexandre", "Piatã", "Pilão Arcado", "Pindaí", "Pindobaçu", "Pintadas",
    "Pio XII", "Piripá", "Piritiba", "Planaltino", "Planalto", "Poções", "Pojuca", "Ponto Novo",
    "Porto Seguro", "Potiraguá", "Prado", "Presidente Dutra", "Presidente Jânio Quadros",
    "Presidente Tancredo Neves", "Queimadas", "Quijingue", "Quixabeira", "Rafael Jambeiro",
    "Remanso", "Retirolândia", "Riachão das Neves", "Riachão do Jacuípe", "Riacho de Santana",
    "Ribeira do Amparo", "Ribeira do Pombal", "Ribeirão do Largo", "Rio de Contas",
    "Rio do Antônio", "Rio do Pires", "Rio Real", "Rodelas", "Ruy Barbosa", "Salinas da Margarida",
    "Salvador", "Santa Bárbara", "Santa Brígida", "Santa Cruz Cabrália", "Santa Cruz da Vitória",
    "Santa Inês", "Santa Luzia", "Santa Maria da Vitória", "Santa Rita de Cássia", "Santaluz",
    "Santana", "Sapeaçu", "Sátiro Dias", "Saubara", "Saúde", "Seabra", "Sebastião Laranjeiras",
    "Senhor do Bonfim", "Sento Sé", "Serra do Ramalho", "Serra Dourada", "Serra Preta", "Serrinha",
    "Serrolândia", "Simões Filho", "Sítio do Mato", "Sítio do Quinto", "Sobradinho",
    "Souto Soares", "São Desidério", "São Domingos", "São Felipe", "São Félix",
    "São Félix do Coribe", "São Francisco do Conde", "São Gabriel", "São Gonçalo dos Campos",
    "São José da Vitória", "São José do Jacuípe", "São Miguel das Matas", "São Sebastião do Passé",
    "Taperoá", "Tapiramutá", "Teixeira de Freitas", "Teodoro Sampaio", "Teofilândia", "Teolândia",
    "Terra Nova", "Tremedal", "Tucano", "Uauá", "Ubaíra", "Ubaitaba", "Ubatã", "Uibaí",
    "Umburanas", "Una", "Urandi", "Uruçuca", "Utinga", "Valença", "Valente", "Várzea da Roça",
    "Várzea do Poço", "Várzea Nova", "Varzedo", "Vera Cruz", "Vereda", "Vitória da Conquista",
    "Wagner", "Wanderley", "Wenceslau Guimarães", "Xique-Xique",
];

const CEARA: &[&str] = &[
    "Acaraú", "Acopiara", "Aiuaba", "Alcântaras", "Altaneira", "Alto Santo", "Amontada",
    "Antonina do Norte", "Apuiarés", "Aquiraz", "Aracati", "Aracoiaba", "Arneiroz", "Apori",
    "Araripe", "Aurora", "Banabuiú", "Barbalha", "Barreira", "Bela Cruz", "Boa Viagem",
    "Brejo Santo", "Camocim", "Campos Sales", "Canindé", "Capistrano", "Caridade", "Caririaçu",
    "Cascavel", "Catarina", "Cedro", "Chaval", "Choró", "Chorozinho", "Crateús", "Crato", "Cruz",
    "Croatá", "Deputado Irapuan Pinheiro", "Ererê", "Eusébio", "Farias Brito", "Forquilha",
    "Fortaleza", "General Sampaio", "Granja", "Graça", "Guaiúba", "Guaramiranga", "Hidrolândia",
    "Icó", "Icapuí", "Iguatu", "Ipu", "Iracema", "Independência", "Ibiapina", "Ibiarará",
    "Jaguaretama", "Jaguaribe", "Jijoca de Jericoacoara", "Jaguaruana", "Jati",
    "Juazeiro do Norte", "Lavras da Mangabeira", "Limoeiro do Norte", "Madalena", "Marco",
    "Martinópole", "Maracanaú", "Maranguape", "Mauriti", "Milagres", "Miraíma", "Missão Velha",
    "Mombaça", "Morada Nova", "Morrinhos", "Mulungu", "Nina Rodrigues", "Nova Olinda",
    "Nova Russas", "Novo Oriente", "Ocara", "Orós", "Pacajus", "Pacatuba", "Pacoti", "Paracuru",
    "Paramoti", "Pedra Branca", "Penaforte", "Pentecoste", "Pereiro", "Pindoretama",
    "Piquet Carneiro", "Poranga", "Porteiras", "Potengi", "Potiretama", "Quixeramobim", "Quixeré",
    "Quiterianópolis", "Quixadá", "Redenção", "Reriutaba", "Russas", "Saboeiro", "Salitre",
    "Santana do Acaraú", "Santana do Cariri", "São Benedito", "São Gonçalo do Amarante",
    "São João do Jaguaribe", "São Luís do Curu", "Senador Pompeu", "Senador Sá", "Sobral",
    "Solonópole", "Tabuleiro do Norte", "Tamboril", "Tauá", "Tejuçuoca", "Tianguá", "Trairi",
    "Tururu", "Uruoca", "Umirim", "Uruburetama", "Varjota", "Viçosa do Ceará",
];
