use phf::{phf_map, Map};

pub(crate) static BIG5: Map<u16, u16> = phf_map! {
    0x0300u16 => 599, 0x0303u16 => 382, 0x0305u16 => 413, 0x0306u16 => 596, 0x0307u16 => 529,
    0x0308u16 => 595, 0x030au16 => 452, 0x030bu16 => 318, 0x0311u16 => 545, 0x0313u16 => 508,
    0x0314u16 => 532, 0x0315u16 => 566, 0x0317u16 => 582, 0x031du16 => 575, 0x0324u16 => 256,
    0x0326u16 => 380, 0x0327u16 => 298, 0x032au16 => 587, 0x032cu16 => 574, 0x0330u16 => 531,
    0x0333u16 => 428, 0x0336u16 => 353, 0x0337u16 => 500, 0x033au16 => 407, 0x033eu16 => 313,
    0x0341u16 => 597, 0x0342u16 => 583, 0x0345u16 => 588, 0x034bu16 => 459, 0x034eu16 => 362,
    0x0353u16 => 302, 0x0356u16 => 304, 0x0359u16 => 360, 0x035bu16 => 502, 0x035eu16 => 513,
    0x035fu16 => 345, 0x036cu16 => 444, 0x036fu16 => 542, 0x0371u16 => 224, 0x0374u16 => 430,
    0x037cu16 => 170, 0x037du16 => 511, 0x0380u16 => 422, 0x0382u16 => 242, 0x0383u16 => 450,
    0x0386u16 => 538, 0x0387u16 => 534, 0x0390u16 => 210, 0x0393u16 => 180, 0x0397u16 => 193,
    0x039bu16 => 201, 0x0400u16 => 498, 0x0402u16 => 283, 0x0404u16 => 504, 0x0408u16 => 585,
    0x040cu16 => 591, 0x040eu16 => 469, 0x0418u16 => 571, 0x041du16 => 181, 0x041fu16 => 388,
    0x0422u16 => 250, 0x0428u16 => 549, 0x0429u16 => 564, 0x0433u16 => 284, 0x0435u16 => 505,
    0x0436u16 => 240, 0x0449u16 => 232, 0x044au16 => 271, 0x0450u16 => 405, 0x0452u16 => 344,
    0x0459u16 => 495, 0x046bu16 => 561, 0x046cu16 => 544, 0x0473u16 => 343, 0x0476u16 => 330,
    0x0479u16 => 293, 0x047au16 => 325, 0x047du16 => 470, 0x0484u16 => 365, 0x0491u16 => 441,
    0x0492u16 => 401, 0x0498u16 => 393, 0x0500u16 => 359, 0x0501u16 => 351, 0x0503u16 => 246,
    0x0510u16 => 527, 0x0515u16 => 484, 0x0517u16 => 315, 0x051eu16 => 403, 0x0521u16 => 576,
    0x0522u16 => 593, 0x0528u16 => 535, 0x052eu16 => 520, 0x052fu16 => 486, 0x0530u16 => 541,
    0x0533u16 => 212, 0x0537u16 => 338, 0x053eu16 => 562, 0x053fu16 => 446, 0x0546u16 => 537,
    0x054au16 => 357, 0x0551u16 => 592, 0x0556u16 => 448, 0x0557u16 => 512, 0x055du16 => 204,
    0x0568u16 => 386, 0x056au16 => 307, 0x056fu16 => 438, 0x0571u16 => 570, 0x0579u16 => 560,
    0x057au16 => 329, 0x0580u16 => 394, 0x0584u16 => 548, 0x0586u16 => 408, 0x058au16 => 453,
    0x058bu16 => 179, 0x0591u16 => 230, 0x059bu16 => 481, 0x0600u16 => 539, 0x0601u16 => 563,
    0x0603u16 => 275, 0x060au16 => 231, 0x060fu16 => 423, 0x0619u16 => 391, 0x0657u16 => 320,
    0x065bu16 => 175, 0x0671u16 => 375, 0x0674u16 => 208, 0x0678u16 => 594, 0x067cu16 => 252,
    0x068du16 => 355, 0x0691u16 => 348, 0x0702u16 => 296, 0x0703u16 => 471, 0x0704u16 => 439,
    0x070du16 => 409, 0x0713u16 => 503, 0x0733u16 => 282, 0x073cu16 => 188, 0x0741u16 => 506,
    0x0742u16 => 421, 0x0749u16 => 327, 0x074bu16 => 494, 0x074cu16 => 336, 0x0758u16 => 558,
    0x0761u16 => 466, 0x0764u16 => 553, 0x0765u16 => 479, 0x0768u16 => 186, 0x076du16 => 497,
    0x0770u16 => 335, 0x0771u16 => 586, 0x077eu16 => 268, 0x0780u16 => 493, 0x0781u16 => 332,
    0x0782u16 => 552, 0x078au16 => 580, 0x0798u16 => 400, 0x079au16 => 364, 0x080du16 => 577,
    0x0825u16 => 254, 0x082cu16 => 192, 0x0837u16 => 507, 0x0850u16 => 226, 0x0857u16 => 235,
    0x0870u16 => 550, 0x0872u16 => 287, 0x088fu16 => 410, 0x0891u16 => 568, 0x0894u16 => 197,
    0x0906u16 => 379, 0x0907u16 => 458, 0x090cu16 => 286, 0x092bu16 => 524, 0x092fu16 => 369,
    0x0930u16 => 303, 0x0936u16 => 389, 0x0945u16 => 372, 0x094au16 => 189, 0x0958u16 => 600,
    0x095bu16 => 464, 0x095cu16 => 499, 0x0963u16 => 305, 0x096au16 => 536, 0x097fu16 => 340,
    0x098fu16 => 258, 0x0995u16 => 374, 0x0996u16 => 440, 0x0997u16 => 392, 0x0a03u16 => 248,
    0x0a04u16 => 264, 0x0a08u16 => 310, 0x0a0bu16 => 237, 0x0a0fu16 => 390, 0x0a25u16 => 510,
    0x0a28u16 => 402, 0x0a2eu16 => 396, 0x0a2fu16 => 191, 0x0a3eu16 => 447, 0x0a4au16 => 203,
    0x0a7au16 => 488, 0x0a7du16 => 285, 0x0a7fu16 => 557, 0x0a82u16 => 368, 0x0a94u16 => 200,
    0x0a97u16 => 274, 0x0a9au16 => 415, 0x0b0fu16 => 598, 0x0b19u16 => 489, 0x0b24u16 => 205,
    0x0b31u16 => 290, 0x0b39u16 => 433, 0x0b3fu16 => 476, 0x0b41u16 => 195, 0x0b4eu16 => 589,
    0x0b67u16 => 288, 0x0b77u16 => 247, 0x0b7bu16 => 519, 0x0b81u16 => 289, 0x0b8au16 => 312,
    0x0b93u16 => 172, 0x0b97u16 => 243, 0x0b9au16 => 352, 0x0c2eu16 => 569, 0x0c30u16 => 424,
    0x0c38u16 => 530, 0x0c4fu16 => 509, 0x0c50u16 => 454, 0x0c53u16 => 273, 0x0c55u16 => 346,
    0x0c66u16 => 221, 0x0c6au16 => 581, 0x0c71u16 => 584, 0x0c72u16 => 211, 0x0c99u16 => 455,
    0x0d21u16 => 546, 0x0d25u16 => 269, 0x0d29u16 => 460, 0x0d62u16 => 207, 0x0d64u16 => 457,
    0x0d67u16 => 573, 0x0d6fu16 => 272, 0x0d78u16 => 419, 0x0d84u16 => 199, 0x0d96u16 => 228,
    0x0d9au16 => 381, 0x0e13u16 => 442, 0x0e35u16 => 334, 0x0e5eu16 => 253, 0x0e63u16 => 431,
    0x0e7eu16 => 556, 0x0e89u16 => 241, 0x0f0fu16 => 292, 0x0f1fu16 => 522, 0x0f3cu16 => 206,
    0x0f41u16 => 229, 0x0f46u16 => 473, 0x0f48u16 => 491, 0x0f49u16 => 321, 0x0f53u16 => 406,
    0x0f66u16 => 333, 0x0f6du16 => 412, 0x0f6fu16 => 173, 0x0f71u16 => 265, 0x0f7bu16 => 474,
    0x0f88u16 => 578, 0x0f90u16 => 436, 0x100du16 => 190, 0x100eu16 => 515, 0x1020u16 => 451,
    0x1021u16 => 339, 0x1029u16 => 311, 0x102au16 => 411, 0x102fu16 => 565, 0x1031u16 => 501,
    0x1053u16 => 426, 0x1062u16 => 350, 0x106eu16 => 342, 0x1078u16 => 218, 0x110du16 => 354,
    0x1120u16 => 260, 0x1136u16 => 219, 0x113bu16 => 480, 0x1151u16 => 475, 0x1152u16 => 202,
    0x116cu16 => 427, 0x1171u16 => 171, 0x1173u16 => 472, 0x117du16 => 245, 0x1202u16 => 398,
    0x120eu16 => 367, 0x1211u16 => 487, 0x1217u16 => 385, 0x121cu16 => 297, 0x121du16 => 445,
    0x122fu16 => 590, 0x1231u16 => 467, 0x1233u16 => 262, 0x1234u16 => 341, 0x1239u16 => 387,
    0x1241u16 => 533, 0x1264u16 => 251, 0x126au16 => 482, 0x1270u16 => 238, 0x1284u16 => 347,
    0x1293u16 => 337, 0x1296u16 => 322, 0x130eu16 => 567, 0x1318u16 => 414, 0x131fu16 => 270,
    0x1341u16 => 465, 0x135fu16 => 420, 0x140cu16 => 528, 0x140du16 => 540, 0x142fu16 => 543,
    0x143bu16 => 461, 0x1457u16 => 395, 0x1476u16 => 316, 0x1479u16 => 554, 0x1508u16 => 456,
    0x1516u16 => 280, 0x1527u16 => 255, 0x1529u16 => 517, 0x1542u16 => 397, 0x1543u16 => 370,
    0x154eu16 => 301, 0x1555u16 => 267, 0x1565u16 => 299, 0x1588u16 => 182, 0x160eu16 => 477,
    0x1610u16 => 239, 0x1611u16 => 468, 0x1633u16 => 492, 0x163cu16 => 559, 0x163eu16 => 483,
    0x1643u16 => 366, 0x1663u16 => 300, 0x1665u16 => 223, 0x1671u16 => 174, 0x168bu16 => 523,
    0x1715u16 => 331, 0x1720u16 => 309, 0x1727u16 => 525, 0x172du16 => 196, 0x1733u16 => 295,
    0x1757u16 => 220, 0x1769u16 => 278, 0x176au16 => 551, 0x1771u16 => 168, 0x177au16 => 308,
    0x1788u16 => 435, 0x1792u16 => 432, 0x1799u16 => 425, 0x1801u16 => 416, 0x1802u16 => 417,
    0x1804u16 => 572, 0x1806u16 => 328, 0x180cu16 => 547, 0x1858u16 => 216, 0x186cu16 => 236,
    0x186du16 => 429, 0x188du16 => 555, 0x1923u16 => 227, 0x193fu16 => 177, 0x1976u16 => 516,
    0x1977u16 => 225, 0x197cu16 => 443, 0x1980u16 => 276, 0x1989u16 => 222, 0x1999u16 => 217,
    0x1a10u16 => 521, 0x1a3bu16 => 361, 0x1a3fu16 => 579, 0x1a62u16 => 234, 0x1a78u16 => 266,
    0x1a7bu16 => 291, 0x1a80u16 => 383, 0x1a90u16 => 526, 0x1a97u16 => 166, 0x1b17u16 => 373,
    0x1b27u16 => 213, 0x1b28u16 => 194, 0x1b33u16 => 294, 0x1b34u16 => 187, 0x1b36u16 => 277,
    0x1b69u16 => 478, 0x1b6eu16 => 214, 0x1b94u16 => 384, 0x1c14u16 => 314, 0x1c73u16 => 178,
    0x1c75u16 => 418, 0x1d01u16 => 184, 0x1d29u16 => 198, 0x1d57u16 => 377, 0x1d65u16 => 518,
    0x1d67u16 => 378, 0x1d72u16 => 404, 0x1d78u16 => 399, 0x1d81u16 => 306, 0x1d98u16 => 233,
    0x1e2eu16 => 326, 0x1e42u16 => 176, 0x1e51u16 => 490, 0x1e69u16 => 209, 0x1e8au16 => 249,
    0x1e8du16 => 215, 0x1f19u16 => 437, 0x1f41u16 => 376, 0x1f77u16 => 371, 0x2020u16 => 449,
    0x202eu16 => 323, 0x2030u16 => 363, 0x2077u16 => 514, 0x2109u16 => 496, 0x211fu16 => 261,
    0x2152u16 => 279, 0x217eu16 => 349, 0x2195u16 => 317, 0x2204u16 => 463, 0x226fu16 => 185,
    0x2270u16 => 356, 0x2282u16 => 434, 0x2294u16 => 485, 0x2296u16 => 259, 0x229cu16 => 319,
    0x2319u16 => 165, 0x2331u16 => 257, 0x2351u16 => 324, 0x2370u16 => 462, 0x237bu16 => 183,
    0x240bu16 => 167, 0x2414u16 => 244, 0x2436u16 => 358, 0x2443u16 => 169, 0x2485u16 => 263,
    0x251bu16 => 281,
};
